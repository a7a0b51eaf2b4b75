//! A point on the integer plane.

use libm::hypot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the plane with integer coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// The x-coordinate (columns grow to the right).
    pub x: i32,
    /// The y-coordinate (rows grow upward).
    pub y: i32,
}

impl Point {
    /// Creates a new point at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point shifted by `(dx, dy)`.
    ///
    /// Coordinates wrap on overflow.
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Computes the Euclidean distance to `other`.
    ///
    /// Coordinates are widened to `f64` before subtracting, so the
    /// difference cannot overflow even between extreme corners of the
    /// `i32` range.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        hypot(dx, dy)
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
