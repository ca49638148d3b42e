//! `patrol-sim` — the guard's movement state machine.
//!
//! # Step rule
//!
//! ```text
//! while Active:
//!   ① candidate = position + heading.delta
//!   ② if candidate is obstructed:
//!        heading = heading.rotate_clockwise()      (once per step)
//!        candidate = position + heading.delta
//!   ③ position = candidate; visited.insert(position)
//!   ④ if position is outside the grid → Exited
//! ```
//!
//! The out-of-bounds exit cell lands in the visited set, so
//! [`PatrolSimulator::visited_count`] reports `visited.len() - 1`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use patrol_grid::parse_grid;
//! use patrol_sim::{NoopObserver, PatrolSimulator};
//!
//! let grid = parse_grid(text)?;
//! let outcome = PatrolSimulator::new(grid).run(&mut NoopObserver);
//! println!("{}", outcome.visited_count);
//! ```

pub mod observer;
pub mod sim;


pub use observer::{NoopObserver, PatrolObserver};
pub use sim::{PatrolOutcome, PatrolSimulator, PatrolState, patrol_from_str};
