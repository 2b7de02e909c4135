//! Mob placement records
//!
//! Generation only needs to know which cells are occupied; behavior lives
//! elsewhere. IDs are assigned by the level on placement.

use serde::{Deserialize, Serialize};

/// Mob identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MobId(pub u32);

/// A mob standing on a cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mob {
    pub id: MobId,
    /// Flat cell index of the mob's position
    pub pos: usize,
}
