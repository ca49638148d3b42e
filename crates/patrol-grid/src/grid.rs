//! `GridModel` — read-only board description — and its builder.

use patrol_core::{Coordinate, CoordinateSet, Heading};

use crate::{GridError, GridResult};

// ── GridModel ─────────────────────────────────────────────────────────────────

/// The static description of a patrol board.
///
/// Built once (via [`GridModelBuilder`] or the [`loader`][crate::loader]) and
/// never mutated afterwards.  Every obstruction lies inside
/// `[0, width) × [0, height)`, so out-of-bounds coordinates are never
/// obstructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridModel {
    width:            i32,
    height:           i32,
    obstructions:     CoordinateSet,
    initial_position: Coordinate,
    initial_heading:  Heading,
}

impl GridModel {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` iff `c` lies within `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y)
    }

    /// `true` iff `c` is an obstruction.
    #[inline]
    pub fn is_obstructed(&self, c: Coordinate) -> bool {
        self.obstructions.contains(&c)
    }

    pub fn obstructions(&self) -> &CoordinateSet {
        &self.obstructions
    }

    pub fn obstruction_count(&self) -> usize {
        self.obstructions.len()
    }

    #[inline]
    pub fn initial_position(&self) -> Coordinate {
        self.initial_position
    }

    #[inline]
    pub fn initial_heading(&self) -> Heading {
        self.initial_heading
    }
}

// ── GridModelBuilder ──────────────────────────────────────────────────────────

/// Incrementally describe a board, then call [`build`][Self::build].
///
/// ```rust,ignore
/// let grid = GridModelBuilder::new(5, 5)
///     .obstruction(Coordinate::new(2, 1))
///     .agent(Coordinate::new(2, 2), Heading::North)
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridModelBuilder {
    width:        usize,
    height:       usize,
    obstructions: Vec<Coordinate>,
    agent:        Option<(Coordinate, Heading)>,
}

impl GridModelBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Mark a single cell as obstructed.  Duplicates are harmless.
    pub fn obstruction(mut self, at: Coordinate) -> Self {
        self.obstructions.push(at);
        self
    }

    pub fn obstructions<I: IntoIterator<Item = Coordinate>>(mut self, cells: I) -> Self {
        self.obstructions.extend(cells);
        self
    }

    /// Set the guard's start cell and heading.  A later call replaces an
    /// earlier one.
    pub fn agent(mut self, at: Coordinate, heading: Heading) -> Self {
        self.agent = Some((at, heading));
        self
    }

    /// Validate extents, start, and obstructions and produce a [`GridModel`].
    ///
    /// The start cell is not checked against the obstruction set; a guard
    /// placed on an obstruction simply walks off it.
    pub fn build(self) -> GridResult<GridModel> {
        let (width, height) = checked_extents(self.width, self.height)?;

        let (initial_position, initial_heading) =
            self.agent.ok_or(GridError::MissingAgentMarker)?;

        let in_bounds = |c: Coordinate| (0..width).contains(&c.x) && (0..height).contains(&c.y);

        if !in_bounds(initial_position) {
            return Err(GridError::OutOfBounds { what: "guard start", at: initial_position });
        }

        let mut obstructions = CoordinateSet::default();
        for at in self.obstructions {
            if !in_bounds(at) {
                return Err(GridError::OutOfBounds { what: "obstruction", at });
            }
            obstructions.insert(at);
        }

        Ok(GridModel {
            width,
            height,
            obstructions,
            initial_position,
            initial_heading,
        })
    }
}

/// Convert `usize` extents to the signed coordinate space.
///
/// Both extents must be positive and fit in `i32`.
pub(crate) fn checked_extents(width: usize, height: usize) -> GridResult<(i32, i32)> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GridError::TooLarge { width, height }),
    }
}
