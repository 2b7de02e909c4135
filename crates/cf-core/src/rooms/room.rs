//! Room footprint: the abstract rectangle a painter carves into the level

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::RoomKind;
use crate::dungeon::{Point, Rect};
use cf_rng::GameRng;

/// Size bands a footprint dimension is sampled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    Normal,
    Large,
    Giant,
}

impl SizeCategory {
    /// Categories in weight-vector order
    pub const ALL: [SizeCategory; 3] = [
        SizeCategory::Normal,
        SizeCategory::Large,
        SizeCategory::Giant,
    ];

    /// Smallest dimension in this band, walls included
    pub const fn min_dim(self) -> i32 {
        match self {
            SizeCategory::Normal => 4,
            SizeCategory::Large => 10,
            SizeCategory::Giant => 14,
        }
    }

    /// Largest dimension in this band, walls included
    pub const fn max_dim(self) -> i32 {
        match self {
            SizeCategory::Normal => 10,
            SizeCategory::Large => 14,
            SizeCategory::Giant => 18,
        }
    }

    /// Sample one footprint dimension from this band
    pub fn sample_dim(self, rng: &mut GameRng) -> i32 {
        rng.int_range(self.min_dim(), self.max_dim())
    }
}

/// Errors from room construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("footprint {width}x{height} is below the {min}x{min} minimum for {kind}")]
    FootprintTooSmall {
        kind: RoomKind,
        width: i32,
        height: i32,
        min: i32,
    },
}

/// Abstract room footprint, walls included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub rect: Rect,
    pub kind: RoomKind,
}

impl Room {
    /// Create a room over an explicit footprint
    ///
    /// Rejects footprints below the kind's minimum dimensions. Painters
    /// rely on the minimum holding: exit placement loops until it finds an
    /// eligible interior cell and a sub-minimum footprint may have none.
    pub fn new(kind: RoomKind, rect: Rect) -> Result<Self, RoomError> {
        let min = kind.min_dim();
        if rect.width() < min || rect.height() < min {
            return Err(RoomError::FootprintTooSmall {
                kind,
                width: rect.width(),
                height: rect.height(),
                min,
            });
        }
        Ok(Self { rect, kind })
    }

    /// Create a room at `origin` with dimensions sampled from the kind's
    /// size-category weights
    pub fn sized(kind: RoomKind, origin: Point, rng: &mut GameRng) -> Self {
        let category = SizeCategory::ALL[rng.chances(&kind.size_cat_probs())];
        let min = kind.min_dim();
        let width = category.sample_dim(rng).max(min);
        let height = category.sample_dim(rng).max(min);
        Self {
            rect: Rect::from_size(origin.x, origin.y, width, height),
            kind,
        }
    }

    pub fn width(&self) -> i32 {
        self.rect.width()
    }

    pub fn height(&self) -> i32 {
        self.rect.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_sub_minimum_footprint() {
        let err = Room::new(RoomKind::FissureEntrance, Rect::from_size(0, 0, 4, 6));
        assert!(matches!(
            err,
            Err(RoomError::FootprintTooSmall { min: 5, width: 4, .. })
        ));

        assert!(Room::new(RoomKind::FissureEntrance, Rect::from_size(0, 0, 5, 5)).is_ok());
        assert!(Room::new(RoomKind::Fissure, Rect::from_size(0, 0, 4, 4)).is_ok());
    }

    #[test]
    fn test_sized_respects_kind_minimum() {
        let mut rng = GameRng::new(31337);
        for _ in 0..200 {
            let room = Room::sized(RoomKind::FissureEntrance, Point::new(0, 0), &mut rng);
            assert!(room.width() >= 5 && room.height() >= 5, "{:?}", room.rect);
        }
    }

    #[test]
    fn test_entrance_rooms_are_never_giant() {
        // Weight vector [3, 1, 0] excludes the Giant band entirely
        let mut rng = GameRng::new(4242);
        for _ in 0..500 {
            let room = Room::sized(RoomKind::FissureEntrance, Point::new(0, 0), &mut rng);
            assert!(room.width() <= SizeCategory::Large.max_dim());
            assert!(room.height() <= SizeCategory::Large.max_dim());
        }
    }

    #[test]
    fn test_size_bands_are_contiguous() {
        assert_eq!(SizeCategory::Normal.max_dim(), SizeCategory::Large.min_dim());
        assert_eq!(SizeCategory::Large.max_dim(), SizeCategory::Giant.min_dim());
    }
}
