//! `patrol-grid` — the static board a guard patrols.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`grid`]   | `GridModel` (extents, obstructions, start), `GridModelBuilder` |
//! | [`loader`] | `parse_grid`, `load_grid_reader`, `load_grid_path`           |
//! | [`error`]  | `GridError`, `GridResult<T>`                                 |
//!
//! # Input format
//!
//! ```text
//! ....#.....
//! .........#
//! ..#.......
//! ....^.....
//! ```
//!
//! `#` is an obstruction, `^` is the single guard start (facing north), and
//! every other character is open floor.

pub mod error;
pub mod grid;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{GridModel, GridModelBuilder};
pub use loader::{AGENT_MARKER, OBSTRUCTION_MARKER, load_grid_path, load_grid_reader, parse_grid};
