//! Tile-writing utilities
//!
//! The only mutation path room painters use. All writes assume the target
//! lies on the grid; indexing panics otherwise.

use super::{Level, Point, Rect, Terrain};

/// Write one cell
pub fn set(level: &mut Level, cell: usize, terrain: Terrain) {
    level.map[cell] = terrain;
}

/// Write one cell addressed by point
pub fn set_at(level: &mut Level, p: Point, terrain: Terrain) {
    let cell = level.point_to_cell(p);
    set(level, cell, terrain);
}

/// Fill every cell of a rectangle
pub fn fill(level: &mut Level, rect: Rect, terrain: Terrain) {
    for y in rect.top..=rect.bottom {
        for x in rect.left..=rect.right {
            set_at(level, Point::new(x, y), terrain);
        }
    }
}

/// Fill a rectangle inset by `m` cells on every side
pub fn fill_inset(level: &mut Level, rect: Rect, m: i32, terrain: Terrain) {
    fill(level, rect.inset(m), terrain);
}
