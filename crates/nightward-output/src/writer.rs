//! The `OutputWriter` trait implemented by the CSV backend.

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends. The only shipped implementation is
/// [`crate::CsvWriter`]; the trait stays separate from it so alternative
/// backends can be added later without touching `WorldOutputObserver`.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`crate::WorldOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
