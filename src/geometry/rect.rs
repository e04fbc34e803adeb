//! Rectangle value types for world-space and cell-range computations
//!
//! `Rect` is a floating-point axis-aligned rectangle in world space, while
//! `IRect` is an inclusive range of integer cell coordinates. Both are plain
//! min/max pairs with no validation; callers are expected to supply ordered
//! corners.

use glam::{IVec2, Vec2};

/// Axis-aligned floating-point rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner (top-left in screen coordinates)
    pub min: Vec2,
    /// Maximum corner (bottom-right in screen coordinates)
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left position and size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    /// Create a rectangle from its two corners
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Top-left position of the rectangle
    pub const fn position(&self) -> Vec2 {
        self.min
    }

    /// Size of the rectangle
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if a point lies within the rectangle (min inclusive, max exclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
    }
}

/// Inclusive range of integer cell coordinates
///
/// Unlike `Rect`, both corners are part of the range: a rectangle with
/// `min == max` covers exactly one cell. A rectangle whose `max` component
/// is smaller than the corresponding `min` component is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IRect {
    /// Minimum cell coordinate (inclusive)
    pub min: IVec2,
    /// Maximum cell coordinate (inclusive)
    pub max: IVec2,
}

impl IRect {
    /// Create a cell range from its two corner coordinates
    pub const fn from_min_max(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Expand the range by `amount` cells in every direction
    pub fn grow(self, amount: i32) -> Self {
        Self {
            min: self.min - IVec2::splat(amount),
            max: self.max + IVec2::splat(amount),
        }
    }

    /// Check if a cell coordinate lies within the range
    pub const fn contains(&self, coords: IVec2) -> bool {
        coords.x >= self.min.x
            && coords.x <= self.max.x
            && coords.y >= self.min.y
            && coords.y <= self.max.y
    }

    /// Number of cells covered horizontally (zero when empty)
    pub const fn width(&self) -> i32 {
        if self.max.x < self.min.x {
            0
        } else {
            self.max.x - self.min.x + 1
        }
    }

    /// Number of cells covered vertically (zero when empty)
    pub const fn height(&self) -> i32 {
        if self.max.y < self.min.y {
            0
        } else {
            self.max.y - self.min.y + 1
        }
    }

    /// Iterate over every cell coordinate in the range, row by row
    pub fn cells(self) -> impl Iterator<Item = IVec2> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| IVec2::new(x, y)))
    }
}
