//! Generic fissure room painting
//!
//! Walls around the footprint, open floor inside, then a meandering chasm
//! crack across the longer interior axis. One clear line of floor always
//! crosses the crack, so the room stays traversable and exit placement in
//! the entrance variant always finds an eligible cell.

use crate::dungeon::{painter, Level, Point, Terrain};
use cf_rng::GameRng;

use super::Room;

/// Paint the base fissure pattern
pub fn paint(room: &Room, level: &mut Level, rng: &mut GameRng) {
    painter::fill(level, room.rect, Terrain::Wall);
    painter::fill_inset(level, room.rect, 1, Terrain::Empty);

    let interior = room.rect.inset(1);
    let horizontal = interior.width() >= interior.height();
    let half = 1 + interior.width().min(interior.height()) / 8;

    let bridge = if horizontal {
        bridge_line(interior.left, interior.right, rng)
    } else {
        bridge_line(interior.top, interior.bottom, rng)
    };

    if horizontal {
        let mut center = (interior.top + interior.bottom) / 2;
        for x in interior.left..=interior.right {
            if x != bridge {
                let lo = (center - half).max(interior.top);
                let hi = (center + half).min(interior.bottom);
                for y in lo..=hi {
                    painter::set_at(level, Point::new(x, y), Terrain::Chasm);
                }
            }
            center = (center + rng.int_range(-1, 1)).clamp(interior.top, interior.bottom);
        }
    } else {
        let mut center = (interior.left + interior.right) / 2;
        for y in interior.top..=interior.bottom {
            if y != bridge {
                let lo = (center - half).max(interior.left);
                let hi = (center + half).min(interior.right);
                for x in lo..=hi {
                    painter::set_at(level, Point::new(x, y), Terrain::Chasm);
                }
            }
            center = (center + rng.int_range(-1, 1)).clamp(interior.left, interior.right);
        }
    }
}

/// Pick the line the crack skips, away from the side walls when the
/// interior is wide enough
fn bridge_line(lo: i32, hi: i32, rng: &mut GameRng) -> i32 {
    if hi - lo >= 2 {
        rng.int_range(lo + 1, hi - 1)
    } else {
        rng.int_range(lo, hi)
    }
}
