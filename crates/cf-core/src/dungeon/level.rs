//! Level structure: tile grid, transitions and mobs

use serde::{Deserialize, Serialize};

use super::{LevelTransition, Point, Terrain};
use crate::mob::{Mob, MobId};

/// A level's tile grid plus the records generation attaches to it
///
/// The map is a flat row-major vector of terrain; painters address it by
/// cell index. The level is exclusively owned by the generation pipeline
/// while painters run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    width: usize,
    height: usize,

    /// Terrain at each cell
    pub map: Vec<Terrain>,

    /// Transition points registered by room painters
    pub transitions: Vec<LevelTransition>,

    /// Mobs placed on the level
    pub mobs: Vec<Mob>,

    /// Next mob ID to assign
    next_mob_id: u32,
}

impl Level {
    /// Create a new level filled with wall
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            map: vec![Terrain::Wall; width * height],
            transitions: Vec::new(),
            mobs: Vec::new(),
            next_mob_id: 1,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert a point to its flat cell index
    pub fn point_to_cell(&self, p: Point) -> usize {
        debug_assert!(self.inside(p), "{p:?} outside {}x{}", self.width, self.height);
        p.x as usize + p.y as usize * self.width
    }

    /// Convert a flat cell index back to a point
    pub fn cell_to_point(&self, cell: usize) -> Point {
        Point::new((cell % self.width) as i32, (cell / self.width) as i32)
    }

    /// Check if a point lies on the grid
    pub fn inside(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Get the mob standing on a cell, if any
    pub fn find_mob(&self, cell: usize) -> Option<&Mob> {
        self.mobs.iter().find(|m| m.pos == cell)
    }

    /// Place a mob on a cell
    pub fn add_mob(&mut self, pos: usize) -> MobId {
        let id = MobId(self.next_mob_id);
        self.next_mob_id += 1;
        self.mobs.push(Mob { id, pos });
        id
    }

    /// Remove a mob from the level
    pub fn remove_mob(&mut self, id: MobId) -> Option<Mob> {
        let idx = self.mobs.iter().position(|m| m.id == id)?;
        Some(self.mobs.remove(idx))
    }

    /// Get the transition registered on a cell, if any
    pub fn transition_at(&self, cell: usize) -> Option<&LevelTransition> {
        self.transitions.iter().find(|t| t.cell == cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_level_is_all_wall() {
        let level = Level::new(8, 6);
        assert_eq!(level.map.len(), 48);
        assert!(level.map.iter().all(|&t| t == Terrain::Wall));
        assert!(level.transitions.is_empty());
    }

    #[test]
    fn test_cell_indexing_round_trip() {
        let level = Level::new(13, 9);
        for y in 0..9 {
            for x in 0..13 {
                let p = Point::new(x, y);
                assert_eq!(level.cell_to_point(level.point_to_cell(p)), p);
            }
        }
        assert_eq!(level.point_to_cell(Point::new(0, 0)), 0);
        assert_eq!(level.point_to_cell(Point::new(12, 8)), 13 * 9 - 1);
    }

    #[test]
    fn test_mob_lookup() {
        let mut level = Level::new(10, 10);
        assert!(level.find_mob(55).is_none());

        let id = level.add_mob(55);
        assert_eq!(level.find_mob(55).map(|m| m.id), Some(id));
        assert!(level.find_mob(56).is_none());

        level.remove_mob(id);
        assert!(level.find_mob(55).is_none());
    }

    #[test]
    fn test_mob_ids_are_distinct() {
        let mut level = Level::new(10, 10);
        let a = level.add_mob(3);
        let b = level.add_mob(3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_transition_at() {
        use crate::dungeon::TransitionKind;

        let mut level = Level::new(10, 10);
        level
            .transitions
            .push(LevelTransition::new(42, TransitionKind::RegularExit));
        assert_eq!(
            level.transition_at(42).map(|t| t.kind),
            Some(TransitionKind::RegularExit)
        );
        assert!(level.transition_at(41).is_none());
    }
}
