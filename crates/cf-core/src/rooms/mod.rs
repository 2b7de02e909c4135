//! Room footprints and painters
//!
//! Room archetypes are tags in [`RoomKind`]; each tag answers the
//! capability queries the assembly pipeline makes (size-category weights,
//! entrance marking, minimum dimensions) and [`Room::paint`] dispatches to
//! the tag's painter. Variants compose by calling each other's painters
//! in sequence.

pub mod entrance;
pub mod fissure;

mod room;

pub use room::{Room, RoomError, SizeCategory};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::dungeon::Level;
use cf_rng::GameRng;

/// Room archetype tags
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RoomKind {
    /// Interior crossed by a chasm crack
    Fissure,
    /// Fissure room holding the level's exit transition
    FissureEntrance,
}

impl RoomKind {
    /// Size-category selection weights, ordered [Normal, Large, Giant]
    pub const fn size_cat_probs(self) -> [u32; 3] {
        match self {
            RoomKind::Fissure => [4, 2, 1],
            RoomKind::FissureEntrance => [3, 1, 0],
        }
    }

    /// Check if this room holds the level's starting transition point
    pub const fn is_entrance(self) -> bool {
        matches!(self, RoomKind::FissureEntrance)
    }

    /// Smallest accepted footprint dimension, walls included
    ///
    /// Exit placement samples the footprint inset by 2; a 5-cell dimension
    /// keeps that region non-empty.
    pub const fn min_dim(self) -> i32 {
        match self {
            RoomKind::Fissure => 4,
            RoomKind::FissureEntrance => 5,
        }
    }
}

impl Room {
    /// Carve this room into the level
    pub fn paint(&self, level: &mut Level, rng: &mut GameRng) {
        match self.kind {
            RoomKind::Fissure => fissure::paint(self, level, rng),
            RoomKind::FissureEntrance => entrance::paint(self, level, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_size_cat_probs() {
        assert_eq!(RoomKind::FissureEntrance.size_cat_probs(), [3, 1, 0]);
    }

    #[test]
    fn test_entrance_flag() {
        assert!(RoomKind::FissureEntrance.is_entrance());
        assert!(!RoomKind::Fissure.is_entrance());
    }

    #[test]
    fn test_entrance_minimum_leaves_sampling_region() {
        use crate::dungeon::Rect;

        let min = RoomKind::FissureEntrance.min_dim();
        let rect = Rect::from_size(0, 0, min, min);
        assert!(rect.inset(2).is_valid());
    }
}
