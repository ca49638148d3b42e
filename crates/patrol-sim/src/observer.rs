//! Simulation observer trait for tracing and data collection.

use patrol_core::{Coordinate, Heading};

/// Callbacks invoked by [`PatrolSimulator`][crate::PatrolSimulator] as the
/// guard moves.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Step numbers start at 1.
pub trait PatrolObserver {
    /// Called once, before the first step is taken.
    fn on_start(&mut self, _position: Coordinate, _heading: Heading) {}

    /// Called when an obstruction ahead forced a clockwise turn.
    ///
    /// `step` is the number of the step during which the turn happens; the
    /// matching [`on_step`][Self::on_step] follows immediately.
    fn on_turn(&mut self, _step: u64, _at: Coordinate, _from: Heading, _to: Heading) {}

    /// Called after every committed move, including the final move off the
    /// grid.
    fn on_step(&mut self, _step: u64, _position: Coordinate, _heading: Heading) {}

    /// Called once when the guard leaves the grid.
    ///
    /// `position` is the out-of-bounds cell; `visited_count` is the final
    /// result.
    fn on_exit(&mut self, _step: u64, _position: Coordinate, _visited_count: usize) {}
}

/// A [`PatrolObserver`] that does nothing.
pub struct NoopObserver;

impl PatrolObserver for NoopObserver {}
