//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SummaryRow, TrailRow};

/// Trait implemented by patrol output backends.
///
/// Errors are surfaced to [`TrailObserver`][crate::TrailObserver], which
/// stores the first one for [`take_error`][crate::TrailObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of trail rows.
    fn write_trail(&mut self, rows: &[TrailRow]) -> OutputResult<()>;

    /// Write the single summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
