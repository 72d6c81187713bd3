//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `transitions.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TransitionRow, VehicleSnapshotRow};

pub const SNAPSHOT_FILE: &str = "vehicle_snapshots.csv";
pub const TRANSITION_FILE: &str = "transitions.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots:   Writer<File>,
    transitions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["time", "vehicle_id", "name", "state", "x", "y", "vertiport", "gate"])?;

        let mut transitions = Writer::from_path(dir.join(TRANSITION_FILE))?;
        transitions.write_record(["time", "vehicle_id", "name", "from", "to", "x", "y"])?;

        Ok(Self { snapshots, transitions, finished: false })
    }
}

fn opt(v: Option<u32>) -> String {
    v.map(|i| i.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                format!("{:.3}", row.time),
                row.vehicle_id.to_string(),
                row.name.clone(),
                row.state.to_owned(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                opt(row.vertiport),
                opt(row.gate),
            ])?;
        }
        Ok(())
    }

    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()> {
        self.transitions.write_record(&[
            format!("{:.3}", row.time),
            row.vehicle_id.to_string(),
            row.name.clone(),
            row.from.to_owned(),
            row.to.to_owned(),
            format!("{:.3}", row.x),
            format!("{:.3}", row.y),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.transitions.flush()?;
        Ok(())
    }
}
