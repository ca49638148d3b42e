//! Plain data row types written by output backends.

use patrol_core::Heading;

/// One committed move of the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailRow {
    pub step:      u64,
    pub x:         i32,
    pub y:         i32,
    /// Heading after any turn taken during this step.
    pub heading:   Heading,
    /// `true` if an obstruction forced a turn during this step.
    pub turned:    bool,
    /// `false` only for the final move off the grid.
    pub in_bounds: bool,
}

/// Totals for a finished patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub visited_count: u64,
    pub steps:         u64,
    pub turns:         u64,
    pub exit_x:        i32,
    pub exit_y:        i32,
}
