//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous `f64` in simulated seconds.  Every tick advances it by
//! a fixed step:
//!
//!   dt = base_step * acceleration
//!
//! The acceleration multiplier plays the role of a playback speed-up: the
//! driver may pace ticks against the wall clock at `base_step`, while the
//! simulation itself sees the larger `dt`.  Determinism depends on keeping
//! `dt` and the vehicle enumeration order fixed across runs; the clock itself
//! never varies the step.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Ground time a vehicle spends at the gate between two legs.
pub const TURNAROUND_SECS: f64 = 180.0;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Monotonic simulation clock.
///
/// `SimClock` holds no heap data and is cheap to copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimClock {
    /// Simulated seconds since start.
    pub time: f64,
    /// Real-time step per tick before acceleration.
    pub base_step: f64,
    /// Speed-up factor applied to `base_step`.
    pub acceleration: f64,
    /// Number of ticks advanced so far.
    pub ticks: u64,
}

impl SimClock {
    /// Create a clock at time zero.  Fails if either factor is not a positive
    /// finite number.
    pub fn new(base_step: f64, acceleration: f64) -> CoreResult<Self> {
        if !(base_step.is_finite() && base_step > 0.0) {
            return Err(CoreError::InvalidStep(base_step));
        }
        if !(acceleration.is_finite() && acceleration > 0.0) {
            return Err(CoreError::InvalidAcceleration(acceleration));
        }
        Ok(Self { time: 0.0, base_step, acceleration, ticks: 0 })
    }

    /// Step size seen by the simulation.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.base_step * self.acceleration
    }

    /// Advance by one tick and return the new simulation time.
    #[inline]
    pub fn advance(&mut self) -> f64 {
        self.time += self.dt();
        self.ticks += 1;
        self.time
    }

    /// Break elapsed time into (hours, minutes, seconds) for log lines.
    pub fn elapsed_hms(&self) -> (u64, u32, f64) {
        let total = self.time.max(0.0);
        let hours = (total / 3_600.0).floor() as u64;
        let minutes = ((total % 3_600.0) / 60.0).floor() as u32;
        let seconds = total % 60.0;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "tick {} ({:02}:{:02}:{:04.1})", self.ticks, h, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from JSON by the application crate and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per tick before acceleration.  Default: 0.1.
    pub base_step: f64,

    /// Multiplier on `base_step`.  Default: 1.0.
    pub acceleration: f64,

    /// Upper bound on ticks for `Sim::run`.  A run that hits it stops even if
    /// vehicles are still moving (e.g. stalled forever on a busy gate).
    pub max_ticks: u64,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> CoreResult<SimClock> {
        SimClock::new(self.base_step, self.acceleration)
    }

    /// Simulation step size `base_step * acceleration`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.base_step * self.acceleration
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            base_step:               0.1,
            acceleration:            1.0,
            max_ticks:               1_000_000,
            snapshot_interval_ticks: 0,
        }
    }
}
