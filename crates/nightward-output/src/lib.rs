//! `nightward-output` — CSV snapshot export for the simulation core.
//!
//! Every tick, [`WorldOutputObserver`] writes one row per live agent to
//! `agent_snapshots.csv` plus one summary row to `tick_summaries.csv`. Both
//! implement [`OutputWriter`], kept as a trait so a future backend can be
//! added without touching the observer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nightward_output::{CsvWriter, WorldOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = WorldOutputObserver::new(writer);
//! world.tick(dt, input, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::WorldOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
