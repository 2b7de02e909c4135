//! cf-core: caves level generation
//!
//! Terrain grid, room footprints and the fissure room painters. The crate
//! has no I/O dependencies; everything is driven through a seeded
//! [`GameRng`] so levels regenerate identically from their seed.

pub mod dungeon;
pub mod mob;
pub mod rooms;

pub use cf_rng::GameRng;
