//! Cell coordinates.
//!
//! A [`Point`] addresses one grid cell: `x` is the column, `y` the row.
//! Rows grow downward, so "top" is `y - 1`.

use std::fmt;

/// A cell coordinate. `x` is the column, `y` is the row.
///
/// Coordinates are signed so that callers can hand out-of-grid positions
/// (including negative ones) to the validating setters, which reject them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point from a column and a row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
