//! Points and inclusive rectangles for room footprints

use cf_rng::GameRng;
use serde::{Deserialize, Serialize};

/// Grid point in level coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Inclusive rectangle: covers cells `left..=right`, `top..=bottom`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from inclusive bounds
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and cell dimensions
    pub const fn from_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width - 1,
            bottom: top + height - 1,
        }
    }

    /// Width in cells
    pub const fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Height in cells
    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Check if the rectangle covers at least one cell
    pub const fn is_valid(&self) -> bool {
        self.right >= self.left && self.bottom >= self.top
    }

    /// Check if a point lies inside the rectangle
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Shrink the rectangle by `m` cells on every side
    ///
    /// The result may be invalid when the rectangle is smaller than
    /// `2m + 1` in either dimension; callers sampling from an inset
    /// footprint validate room minimums up front.
    pub const fn inset(&self, m: i32) -> Rect {
        Rect {
            left: self.left + m,
            top: self.top + m,
            right: self.right - m,
            bottom: self.bottom - m,
        }
    }

    /// Uniformly sample a point inside the rectangle
    pub fn random_point(&self, rng: &mut GameRng) -> Point {
        Point {
            x: rng.int_range(self.left, self.right),
            y: rng.int_range(self.top, self.bottom),
        }
    }

    /// Uniformly sample a point inside the rectangle inset by `m`
    pub fn random_point_inset(&self, m: i32, rng: &mut GameRng) -> Point {
        self.inset(m).random_point(rng)
    }
}
