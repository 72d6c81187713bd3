//! `vs-output`: CSV output for vertisim runs.
//!
//! | File                    | One row per                                  |
//! |-------------------------|----------------------------------------------|
//! | `vehicle_snapshots.csv` | vehicle, every `snapshot_interval_ticks`     |
//! | `transitions.csv`       | state change or leg fault                    |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `vs_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vs_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
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
pub use observer::SimOutputObserver;
pub use row::{TransitionRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
