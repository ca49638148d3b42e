//! Grid construction error type.
//!
//! All failure is front-loaded here: once a [`GridModel`][crate::GridModel]
//! exists, simulating it cannot fail.

use thiserror::Error;

use patrol_core::Coordinate;

/// Errors produced while building or loading a grid.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no guard start marker found in grid")]
    MissingAgentMarker,

    #[error("guard start marker appears twice: {first} and {second}")]
    DuplicateAgentMarker { first: Coordinate, second: Coordinate },

    #[error("row {row} has {got} cells, expected {expected}")]
    MalformedGrid { row: usize, expected: usize, got: usize },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("grid of {width}x{height} cells exceeds the addressable range")]
    TooLarge { width: usize, height: usize },

    #[error("{what} at {at} lies outside the grid")]
    OutOfBounds { what: &'static str, at: Coordinate },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
