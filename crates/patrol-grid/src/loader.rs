//! Text grid loader.
//!
//! # Format
//!
//! One line per row, top row first.  Every row must have the same number of
//! characters as the first; trailing blank lines are dropped.
//!
//! | Char | Meaning                                        |
//! |------|------------------------------------------------|
//! | `#`  | Obstruction                                    |
//! | `^`  | Guard start, facing north (exactly one)        |
//! | else | Open floor                                     |

use std::io::Read;
use std::path::Path;

use tracing::debug;

use patrol_core::{Coordinate, Heading};

use crate::grid::checked_extents;
use crate::{GridError, GridModel, GridModelBuilder, GridResult};

pub const OBSTRUCTION_MARKER: char = '#';
pub const AGENT_MARKER: char = '^';

// ── Public API ────────────────────────────────────────────────────────────────

/// Build a [`GridModel`] from grid text.
///
/// # Errors
/// - [`GridError::MalformedGrid`] if any row's length differs from the first.
/// - [`GridError::MissingAgentMarker`] if there is no `^`.
/// - [`GridError::DuplicateAgentMarker`] if there is more than one `^`.
/// - [`GridError::EmptyGrid`] if there are no rows, or the first row is empty.
pub fn parse_grid(text: &str) -> GridResult<GridModel> {
    let mut rows: Vec<&str> = text.lines().collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    let width = rows.first().map_or(0, |row| row.chars().count());
    // Extents are validated up front so the `as i32` casts below are lossless.
    checked_extents(width, rows.len())?;

    let mut builder = GridModelBuilder::new(width, rows.len());
    let mut agent: Option<Coordinate> = None;

    for (y, row) in rows.iter().enumerate() {
        let got = row.chars().count();
        if got != width {
            return Err(GridError::MalformedGrid { row: y, expected: width, got });
        }

        for (x, ch) in row.chars().enumerate() {
            let at = Coordinate::new(x as i32, y as i32);
            match ch {
                OBSTRUCTION_MARKER => builder = builder.obstruction(at),
                AGENT_MARKER => {
                    if let Some(first) = agent {
                        return Err(GridError::DuplicateAgentMarker { first, second: at });
                    }
                    agent = Some(at);
                }
                _ => {}
            }
        }
    }

    let start = agent.ok_or(GridError::MissingAgentMarker)?;
    let grid = builder.agent(start, Heading::North).build()?;

    debug!(
        width = grid.width(),
        height = grid.height(),
        obstructions = grid.obstruction_count(),
        start = %grid.initial_position(),
        "grid loaded"
    );
    Ok(grid)
}

/// Like [`parse_grid`] but reads the text from any `Read` source.
pub fn load_grid_reader<R: Read>(mut reader: R) -> GridResult<GridModel> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_grid(&text)
}

/// Load a grid from a text file.
pub fn load_grid_path(path: &Path) -> GridResult<GridModel> {
    let file = std::fs::File::open(path)?;
    load_grid_reader(file)
}
