//! The `PatrolSimulator` struct and its step loop.

use tracing::{debug, trace, warn};

use patrol_core::{Coordinate, CoordinateSet, Heading};
use patrol_grid::{GridModel, GridResult, parse_grid};

use crate::PatrolObserver;

// ── State & outcome ───────────────────────────────────────────────────────────

/// Lifecycle of a single patrol.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatrolState {
    /// The guard is on an in-bounds cell and will keep walking.
    Active,
    /// Terminal: the guard's last move left the grid.
    Exited,
}

/// Summary of a completed patrol.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolOutcome {
    /// Distinct in-grid cells occupied, including the start cell.
    pub visited_count: usize,
    /// Moves taken, including the final move off the grid.
    pub steps:         u64,
    /// Clockwise turns forced by obstructions.
    pub turns:         u64,
    /// The out-of-bounds cell the guard stepped onto.
    pub exit_position: Coordinate,
    pub exit_heading:  Heading,
}

// ── PatrolSimulator ───────────────────────────────────────────────────────────

/// Runs one guard across one [`GridModel`].
///
/// The simulator owns the grid for the duration of the run; get it back with
/// [`into_grid`][Self::into_grid] to reuse it for another run.
///
/// # Known limitation
///
/// Only one rotation is attempted per step.  If the rotated heading is also
/// blocked the guard still moves, onto the obstruction.  This only arises for
/// a guard hemmed in on two or more adjacent sides and is logged at `warn`.
///
/// [`run`][Self::run] has no step limit.  A grid whose patrol loops never
/// returns.
pub struct PatrolSimulator {
    grid:     GridModel,
    position: Coordinate,
    heading:  Heading,
    visited:  CoordinateSet,
    state:    PatrolState,
    steps:    u64,
    turns:    u64,
    started:  bool,
}

impl PatrolSimulator {
    /// Place the guard at the grid's start cell and heading.
    pub fn new(grid: GridModel) -> Self {
        let position = grid.initial_position();
        let heading = grid.initial_heading();
        let mut visited = CoordinateSet::default();
        visited.insert(position);

        Self {
            grid,
            position,
            heading,
            visited,
            state: PatrolState::Active,
            steps: 0,
            turns: 0,
            started: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn into_grid(self) -> GridModel {
        self.grid
    }

    pub fn state(&self) -> PatrolState {
        self.state
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Every cell the guard has stood on, including the start cell and, once
    /// exited, the out-of-bounds exit cell.
    pub fn visited(&self) -> &CoordinateSet {
        &self.visited
    }

    /// Size of the visited set minus one.
    ///
    /// The subtracted cell is the out-of-bounds exit cell, so the value is
    /// the in-grid cell count only once [`state`][Self::state] is
    /// [`PatrolState::Exited`].
    pub fn visited_count(&self) -> usize {
        self.visited.len() - 1
    }

    /// The final result, or `None` while the guard is still on the grid.
    pub fn outcome(&self) -> Option<PatrolOutcome> {
        match self.state {
            PatrolState::Active => None,
            PatrolState::Exited => Some(self.snapshot()),
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Step until the guard leaves the grid.
    pub fn run<O: PatrolObserver>(&mut self, observer: &mut O) -> PatrolOutcome {
        while self.step(observer) == PatrolState::Active {}
        self.snapshot()
    }

    /// Take at most `n` steps, stopping early on exit.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: PatrolObserver>(&mut self, n: u64, observer: &mut O) -> PatrolState {
        for _ in 0..n {
            if self.step(observer) == PatrolState::Exited {
                break;
            }
        }
        self.state
    }

    /// Perform one transition.  Does nothing once the guard has exited.
    pub fn step<O: PatrolObserver>(&mut self, observer: &mut O) -> PatrolState {
        if self.state == PatrolState::Exited {
            return self.state;
        }
        if !self.started {
            self.started = true;
            debug!(start = %self.position, heading = %self.heading, "patrol started");
            observer.on_start(self.position, self.heading);
        }

        let step = self.steps + 1;
        let mut candidate = self.position + self.heading.movement_delta();

        if self.grid.is_obstructed(candidate) {
            let from = self.heading;
            self.heading = self.heading.rotate_clockwise();
            self.turns += 1;
            trace!(step, at = %self.position, %from, to = %self.heading, "turned");
            observer.on_turn(step, self.position, from, self.heading);

            candidate = self.position + self.heading.movement_delta();
            if self.grid.is_obstructed(candidate) {
                warn!(step, at = %self.position, onto = %candidate, "rotated heading is also blocked; moving onto obstruction");
            }
        }

        self.position = candidate;
        self.steps = step;
        // Recorded before the bounds check; `visited_count` compensates.
        self.visited.insert(candidate);
        trace!(step, position = %candidate, heading = %self.heading, "moved");
        observer.on_step(step, candidate, self.heading);

        if !self.grid.contains(candidate) {
            self.state = PatrolState::Exited;
            let visited_count = self.visited_count();
            debug!(steps = step, turns = self.turns, exit = %candidate, visited_count, "patrol exited");
            observer.on_exit(step, candidate, visited_count);
        }

        self.state
    }

    fn snapshot(&self) -> PatrolOutcome {
        PatrolOutcome {
            visited_count: self.visited_count(),
            steps:         self.steps,
            turns:         self.turns,
            exit_position: self.position,
            exit_heading:  self.heading,
        }
    }
}

/// Parse `text` into a grid and run a patrol over it with no observer.
pub fn patrol_from_str(text: &str) -> GridResult<PatrolOutcome> {
    let grid = parse_grid(text)?;
    Ok(PatrolSimulator::new(grid).run(&mut crate::NoopObserver))
}
