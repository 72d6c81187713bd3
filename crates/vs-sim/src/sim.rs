//! The `Sim` struct and its tick loop.

use log::{debug, info, warn};

use vs_core::{SimClock, SimConfig, VehicleId, VertiportId};
use vs_ground::{Router, Vertiport};
use vs_vehicle::{Vehicle, VehicleSnapshot};

use crate::{CommandIndex, SimError, SimObserver, SimResult};

/// Why [`Sim::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStop {
    /// Every vehicle is done or parked by a fault.
    Settled,
    /// `config.max_ticks` was reached first.
    TickLimit,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick advances the clock by `dt`, then updates every live vehicle
/// once, in ascending `VehicleId` order.  That order is the only tie-break:
/// when two vehicles compete for a node or gate in the same tick, the lower
/// id wins and the other retries on the next tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    pub config: SimConfig,

    pub clock: SimClock,

    /// Vertiports, indexed by `VertiportId`.  Their resource tables are
    /// mutated only from inside [`tick`](Self::tick).
    pub vertiports: Vec<Vertiport>,

    /// Vehicles, indexed by `VehicleId`.
    pub vehicles: Vec<Vehicle>,

    pub router: R,

    pub commands: CommandIndex,

    pub(crate) faults: usize,
}

impl<R: Router> Sim<R> {
    // ── Driving ───────────────────────────────────────────────────────────

    /// Tick until every vehicle has settled or `config.max_ticks` ticks have
    /// elapsed in total, then call `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunStop {
        let stop = loop {
            if self.all_settled() {
                break RunStop::Settled;
            }
            if self.clock.ticks >= self.config.max_ticks {
                break RunStop::TickLimit;
            }
            self.tick(observer);
        };

        let done = self.vehicles.iter().filter(|v| v.fault().is_none() && !v.is_live()).count();
        info!(
            "simulation stopped ({stop:?}) at {}: {done}/{} vehicles done, {} faulted",
            self.clock,
            self.vehicles.len(),
            self.faults,
        );
        observer.on_sim_end(&self.clock);
        stop
    }

    /// Run exactly `n` ticks, ignoring `max_ticks` and settlement.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Advance one tick.  Returns the number of vehicles updated.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let dt = self.clock.dt();
        let now = self.clock.advance();
        observer.on_tick_start(&self.clock);

        let mut live = 0;
        for vehicle in &mut self.vehicles {
            if !vehicle.is_live() {
                continue;
            }
            live += 1;
            match vehicle.update(dt, now, &mut self.vertiports, &self.router) {
                Ok(Some(transition)) => observer.on_transition(vehicle, &transition),
                Ok(None) => {}
                Err(e) => {
                    self.faults += 1;
                    warn!("{} stopped at t={now:.1}: {e}", vehicle.name);
                    observer.on_fault(vehicle, &e);
                }
            }
        }

        observer.on_tick_end(&self.clock, live);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && self.clock.ticks.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.vehicles, &self.vertiports);
        }
        live
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` once no vehicle will move again: each is `Done` or parked by
    /// a leg fault.
    pub fn all_settled(&self) -> bool {
        self.vehicles.iter().all(|v| !v.is_live())
    }

    /// Current simulation time in seconds.
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.time
    }

    /// Number of leg faults reported so far.
    pub fn fault_count(&self) -> usize {
        self.faults
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    pub fn vehicle_by_name(&self, name: &str) -> Option<&Vehicle> {
        self.commands.get(name).and_then(|id| self.vehicle(id))
    }

    pub fn vertiport(&self, id: VertiportId) -> Option<&Vertiport> {
        self.vertiports.get(id.index())
    }

    /// Observable state of every vehicle, in `VehicleId` order.
    pub fn snapshot(&self) -> Vec<VehicleSnapshot> {
        self.vehicles.iter().map(Vehicle::snapshot).collect()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Override a vehicle's destination and/or speed by name.
    ///
    /// An unknown name changes nothing and returns
    /// [`SimError::VehicleNotFound`].  The override itself is not checked for
    /// feasibility; only `target` must name a registered vertiport.
    pub fn issue_command(
        &mut self,
        name:   &str,
        target: Option<VertiportId>,
        speed:  Option<f64>,
    ) -> SimResult<()> {
        let Some(id) = self.commands.get(name) else {
            warn!("command for unknown vehicle {name:?} ignored");
            return Err(SimError::VehicleNotFound(name.to_owned()));
        };
        if let Some(t) = target {
            if t.index() >= self.vertiports.len() {
                warn!("command for {name:?} names unknown vertiport {t}");
                return Err(SimError::UnknownVertiport { vehicle: name.to_owned(), vertiport: t });
            }
        }

        debug!("command for {name:?} at t={:.1}", self.clock.time);
        self.vehicles[id.index()].apply_command(target, speed, &self.vertiports);
        Ok(())
    }
}
