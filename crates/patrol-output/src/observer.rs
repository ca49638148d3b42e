//! `TrailObserver<W>` — bridges `PatrolObserver` to an `OutputWriter`.

use tracing::debug;

use patrol_core::{Coordinate, Heading};
use patrol_sim::PatrolObserver;

use crate::row::{SummaryRow, TrailRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Trail rows are handed to the writer in batches of this size.
const BATCH_ROWS: usize = 1_024;

/// A [`PatrolObserver`] that records every move and the final totals to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `PatrolObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TrailObserver<W: OutputWriter> {
    writer:       W,
    pending:      Vec<TrailRow>,
    turned:       bool,
    turns:        u64,
    rows_written: u64,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> TrailObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:      Vec::with_capacity(BATCH_ROWS),
            turned:       false,
            turns:        0,
            rows_written: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Trail rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_trail(&self.pending);
        self.rows_written += self.pending.len() as u64;
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PatrolObserver for TrailObserver<W> {
    fn on_turn(&mut self, _step: u64, _at: Coordinate, _from: Heading, _to: Heading) {
        self.turned = true;
        self.turns += 1;
    }

    fn on_step(&mut self, step: u64, position: Coordinate, heading: Heading) {
        // Flush before pushing so the latest row is always still pending.
        if self.pending.len() >= BATCH_ROWS {
            self.flush_pending();
        }
        self.pending.push(TrailRow {
            step,
            x: position.x,
            y: position.y,
            heading,
            turned: std::mem::take(&mut self.turned),
            in_bounds: true,
        });
    }

    fn on_exit(&mut self, step: u64, position: Coordinate, visited_count: usize) {
        if let Some(last) = self.pending.last_mut() {
            last.in_bounds = false;
        }
        self.flush_pending();
        debug!(rows = self.rows_written, "trail written");

        let summary = SummaryRow {
            visited_count: visited_count as u64,
            steps:         step,
            turns:         self.turns,
            exit_x:        position.x,
            exit_y:        position.y,
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
