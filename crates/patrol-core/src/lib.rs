//! `patrol-core` — foundational types for the guard patrol simulator.
//!
//! This crate is a dependency of every other `patrol-*` crate.  It has no
//! `patrol-*` dependencies and no mandatory external ones.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coord`]       | `Coordinate`, `CoordinateSet`                         |
//! | [`heading`]     | `Heading` (cardinal direction + clockwise rotation)   |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `fx-hash` | `CoordinateSet` uses FxHash instead of SipHash.          |

pub mod coord;
pub mod heading;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{Coordinate, CoordinateSet};
pub use heading::Heading;
