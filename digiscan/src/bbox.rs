//! Axis-aligned bounding box for pixel components.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with `usize` coordinates.
///
/// Uses inclusive bounds: a pixel at (x, y) is inside if
/// `x_min <= x <= x_max` and `y_min <= y <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aabb {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl Aabb {
    #[inline]
    pub const fn new(x_min: usize, x_max: usize, y_min: usize, y_max: usize) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Box covering the single pixel `(x, y)`.
    #[inline]
    pub const fn from_point(x: usize, y: usize) -> Self {
        Self::new(x, x, y, y)
    }

    /// Expand this bounding box to include the given point.
    #[inline]
    pub fn include(&mut self, x: usize, y: usize) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Horizontal extent `x_max - x_min` (0 for a single column).
    #[inline]
    pub const fn extent_x(&self) -> usize {
        self.x_max - self.x_min
    }

    /// Vertical extent `y_max - y_min` (0 for a single row).
    #[inline]
    pub const fn extent_y(&self) -> usize {
        self.y_max - self.y_min
    }

    /// Number of columns covered.
    #[inline]
    pub const fn width(&self) -> usize {
        self.extent_x() + 1
    }

    /// Number of rows covered.
    #[inline]
    pub const fn height(&self) -> usize {
        self.extent_y() + 1
    }

    #[inline]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
