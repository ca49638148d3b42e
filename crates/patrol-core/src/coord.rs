//! Integer grid coordinates.
//!
//! The grid's origin is the top-left cell; `x` grows to the right and `y`
//! grows downward, so "north" is `y - 1`.  Coordinates are signed because a
//! guard's final move lands one cell outside the grid, which may be `-1`.

use std::fmt;

/// A cell position on the patrol grid.
///
/// Compared and hashed structurally: two coordinates with the same `x` and
/// `y` are indistinguishable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a new coordinate offset by `(dx, dy)`.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Coordinate {
        Coordinate { x: self.x + dx, y: self.y + dy }
    }
}

impl std::ops::Add<(i32, i32)> for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn add(self, (dx, dy): (i32, i32)) -> Coordinate {
        self.translate(dx, dy)
    }
}

impl From<(i32, i32)> for Coordinate {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Membership-only set of coordinates.
#[cfg(not(feature = "fx-hash"))]
pub type CoordinateSet = std::collections::HashSet<Coordinate>;

/// Membership-only set of coordinates (FxHash; integer keys hash faster).
#[cfg(feature = "fx-hash")]
pub type CoordinateSet = rustc_hash::FxHashSet<Coordinate>;
