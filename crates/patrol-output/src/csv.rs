//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trail.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SummaryRow, TrailRow};

pub const TRAIL_FILE: &str = "trail.csv";
pub const SUMMARY_FILE: &str = "summary.csv";

/// Writes patrol output to two CSV files.
pub struct CsvWriter {
    trail:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trail = Writer::from_path(dir.join(TRAIL_FILE))?;
        trail.write_record(["step", "x", "y", "heading", "turned", "in_bounds"])?;

        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record(["visited_count", "steps", "turns", "exit_x", "exit_y"])?;

        Ok(Self {
            trail,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trail(&mut self, rows: &[TrailRow]) -> OutputResult<()> {
        for row in rows {
            self.trail.write_record(&[
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.as_str().to_owned(),
                (row.turned as u8).to_string(),
                (row.in_bounds as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.visited_count.to_string(),
            row.steps.to_string(),
            row.turns.to_string(),
            row.exit_x.to_string(),
            row.exit_y.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trail.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
