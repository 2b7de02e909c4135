//! Level transitions
//!
//! A transition links a cell to a traversal action to another level. The
//! level owns its transitions; painters append them as they place entrance
//! and exit tiles.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The traversal action a transition performs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TransitionKind {
    /// Back out of the dungeon entirely
    Surface = 0,
    RegularEntrance = 1,
    RegularExit = 2,
    BranchEntrance = 3,
    BranchExit = 4,
}

impl TransitionKind {
    /// Check if this transition leads deeper into the dungeon
    pub const fn is_exit(self) -> bool {
        matches!(self, TransitionKind::RegularExit | TransitionKind::BranchExit)
    }

    /// Check if this transition is an arrival point on its level
    pub const fn is_entrance(self) -> bool {
        matches!(
            self,
            TransitionKind::Surface
                | TransitionKind::RegularEntrance
                | TransitionKind::BranchEntrance
        )
    }
}

/// A traversable transition point registered on a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTransition {
    /// Cell index the transition sits on
    pub cell: usize,
    pub kind: TransitionKind,
}

impl LevelTransition {
    /// Create a new transition record
    pub const fn new(cell: usize, kind: TransitionKind) -> Self {
        Self { cell, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_entrance_partition() {
        use strum::IntoEnumIterator;
        for kind in TransitionKind::iter() {
            assert_ne!(kind.is_exit(), kind.is_entrance(), "{kind}");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let t = LevelTransition::new(137, TransitionKind::RegularExit);
        let json = serde_json::to_string(&t).unwrap();
        let back: LevelTransition = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
