//! `patrol-output` — patrol output writers.
//!
//! | Backend | Files created                  |
//! |---------|--------------------------------|
//! | CSV     | `trail.csv`, `summary.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TrailObserver`],
//! which implements `patrol_sim::PatrolObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use patrol_output::{CsvWriter, TrailObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrailObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrailObserver;
pub use row::{SummaryRow, TrailRow};
pub use writer::OutputWriter;
