//! Terrain tile types

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

bitflags! {
    /// Behavior flags shared across terrain types
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TerrainFlags: u8 {
        const PASSABLE = 0x01;
        const LOS_BLOCKING = 0x02;
        const FLAMABLE = 0x04;
        const SOLID = 0x08;
        const AVOID = 0x10;
        const LIQUID = 0x20;
        const PIT = 0x40;
    }
}

/// Terrain tile type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Terrain {
    #[default]
    Wall = 0,
    Empty = 1,
    /// Floor reserved by special-room features; never a valid exit cell
    EmptySpecial = 2,
    EmptyDecorated = 3,
    Grass = 4,
    Water = 5,
    /// Fall-through hazard; also marks room interior not yet finalized
    Chasm = 6,
    Entrance = 7,
    Exit = 8,
}

impl Terrain {
    /// Flag set for this terrain type
    pub const fn flags(self) -> TerrainFlags {
        match self {
            Terrain::Wall => TerrainFlags::SOLID.union(TerrainFlags::LOS_BLOCKING),
            Terrain::Empty | Terrain::EmptySpecial | Terrain::EmptyDecorated => {
                TerrainFlags::PASSABLE
            }
            Terrain::Grass => TerrainFlags::PASSABLE.union(TerrainFlags::FLAMABLE),
            Terrain::Water => TerrainFlags::PASSABLE.union(TerrainFlags::LIQUID),
            Terrain::Chasm => TerrainFlags::AVOID.union(TerrainFlags::PIT),
            Terrain::Entrance | Terrain::Exit => TerrainFlags::PASSABLE,
        }
    }

    /// Check if this tile can be walked onto
    pub const fn is_passable(self) -> bool {
        self.flags().contains(TerrainFlags::PASSABLE)
    }

    /// Check if this tile blocks movement entirely
    pub const fn is_solid(self) -> bool {
        self.flags().contains(TerrainFlags::SOLID)
    }

    /// Check if pathfinding should route around this tile
    pub const fn is_avoided(self) -> bool {
        self.flags().contains(TerrainFlags::AVOID)
    }

    /// Get the display character for this terrain type
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Wall => '#',
            Terrain::Empty => '.',
            Terrain::EmptySpecial => '_',
            Terrain::EmptyDecorated => ',',
            Terrain::Grass => '"',
            Terrain::Water => '~',
            Terrain::Chasm => ' ',
            Terrain::Entrance => '<',
            Terrain::Exit => '>',
        }
    }
}
