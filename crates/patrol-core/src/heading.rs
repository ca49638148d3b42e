//! Cardinal headings and clockwise rotation.

/// The direction a guard is facing.
///
/// Rotation follows the fixed cycle North → East → South → West → North.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    /// Towards row 0.  The implicit heading of the `^` start marker.
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order starting from `North`.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit movement `(dx, dy)` for one step in this heading.
    ///
    /// `y` grows downward, so `North` is `(0, -1)`.
    #[inline]
    pub const fn movement_delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East  => (1, 0),
            Heading::South => (0, 1),
            Heading::West  => (-1, 0),
        }
    }

    /// The next heading in the clockwise cycle.
    #[inline]
    pub const fn rotate_clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East  => Heading::South,
            Heading::South => Heading::West,
            Heading::West  => Heading::North,
        }
    }

    /// Inverse of [`rotate_clockwise`][Self::rotate_clockwise].
    #[inline]
    pub const fn rotate_counter_clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::East  => Heading::North,
            Heading::South => Heading::East,
            Heading::West  => Heading::South,
        }
    }

    /// Lowercase label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "north",
            Heading::East  => "east",
            Heading::South => "south",
            Heading::West  => "west",
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
