//! Fissure room holding the level's exit
//!
//! Paints the base fissure pattern, then tunnels an exit out through the
//! chasm: a clear interior cell becomes the exit tile, the chasm around it
//! opens into floor, and one transition record is registered.

use crate::dungeon::{painter, pathfinder, Level, LevelTransition, Terrain, TransitionKind};
use cf_rng::GameRng;

use super::{fissure, Room};

/// Paint the entrance variant
pub fn paint(room: &Room, level: &mut Level, rng: &mut GameRng) {
    fissure::paint(room, level, rng);
    place_exit(room, level, rng);
}

/// Place the exit tile inside an already painted footprint
///
/// Samples the footprint inset by 2 until it hits a cell that is not
/// chasm, not special floor and not occupied by a mob. The loop is
/// uncapped: a footprint whose deep interior has no eligible cell would
/// spin forever. [`Room::new`] enforces the 5-cell minimum and the base
/// fissure pattern always leaves a clear bridge there, so every
/// constructible room satisfies the precondition.
pub fn place_exit(room: &Room, level: &mut Level, rng: &mut GameRng) {
    let mut exit;
    loop {
        exit = level.point_to_cell(room.rect.random_point_inset(2, rng));
        if level.map[exit] != Terrain::Chasm
            && level.map[exit] != Terrain::EmptySpecial
            && level.find_mob(exit).is_none()
        {
            break;
        }
    }

    // clear a path out of the chasm toward the exit
    for offset in pathfinder::neighbours8(level.width()) {
        let neighbour = (exit as isize + offset) as usize;
        if level.map[neighbour] == Terrain::Chasm {
            painter::set(level, neighbour, Terrain::Empty);
        }
    }

    painter::set(level, exit, Terrain::Exit);
    level
        .transitions
        .push(LevelTransition::new(exit, TransitionKind::RegularExit));
}
