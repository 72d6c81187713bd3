//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use vs_core::SimClock;
use vs_ground::Vertiport;
use vs_sim::SimObserver;
use vs_vehicle::{Transition, Vehicle, VehicleError};

use crate::row::{TransitionRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots, transitions, and leg faults to
/// any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    now:        f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, now: 0.0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, clock: &SimClock) {
        self.now = clock.time;
    }

    fn on_transition(&mut self, vehicle: &Vehicle, transition: &Transition) {
        let result = self.writer.write_transition(&TransitionRow::from_transition(vehicle, transition));
        self.store_err(result);
    }

    fn on_fault(&mut self, vehicle: &Vehicle, _error: &VehicleError) {
        let result = self.writer.write_transition(&TransitionRow::fault(self.now, vehicle));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, time: f64, vehicles: &[Vehicle], _vertiports: &[Vertiport]) {
        let rows: Vec<VehicleSnapshotRow> =
            vehicles.iter().map(|v| VehicleSnapshotRow::from_vehicle(time, v)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
