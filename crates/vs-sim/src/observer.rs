//! Simulation observer trait for progress reporting and data collection.

use vs_core::SimClock;
use vs_ground::Vertiport;
use vs_vehicle::{Transition, Vehicle, VehicleError};

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: status printer
///
/// ```rust,ignore
/// struct Status { every_secs: f64, next: f64 }
///
/// impl SimObserver for Status {
///     fn on_tick_end(&mut self, clock: &SimClock, live: usize) {
///         if clock.time >= self.next {
///             println!("{clock}: {live} vehicles active");
///             self.next += self.every_secs;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, after the clock has advanced and
    /// before any vehicle moves.
    fn on_tick_start(&mut self, _clock: &SimClock) {}

    /// Called at the end of each tick.  `live` is the number of vehicles
    /// that were updated.
    fn on_tick_end(&mut self, _clock: &SimClock, _live: usize) {}

    /// A vehicle changed state.
    fn on_transition(&mut self, _vehicle: &Vehicle, _transition: &Transition) {}

    /// A vehicle's leg was aborted.  Reported once per vehicle.
    fn on_fault(&mut self, _vehicle: &Vehicle, _error: &VehicleError) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to the full simulation state.
    fn on_snapshot(&mut self, _time: f64, _vehicles: &[Vehicle], _vertiports: &[Vertiport]) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
