//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use vs_core::{Point, SimConfig, VehicleId, VertiportId};
use vs_ground::{GroundLayout, Router, Vertiport};
use vs_vehicle::{Vehicle, VehicleSpec};

use crate::{CommandIndex, Sim, SimError, SimResult};

/// Builder for [`Sim<R>`].
///
/// Vertiports and vehicles are registered one at a time and receive dense
/// ids in registration order.  Vehicles are created (and request their
/// initial gate) in that same order during [`build`](Self::build), so with
/// fewer gates than vehicles the earliest registrations park first.
///
/// # Example
///
/// ```rust,ignore
/// let layout = Arc::new(quad_layout()?);
/// let mut b = SimBuilder::new(SimConfig::default(), UniformCostRouter);
/// let a = b.vertiport("A", Point::new(5.0, 30.0), Point::ORIGIN, layout.clone());
/// let c = b.vertiport("B", Point::new(25.0, 30.0), Point::new(30.0, 0.0), layout);
/// b.vehicle(VehicleSpec::from_plan("UAM-1", a, 0.0, &[c, a]).unwrap());
/// let mut sim = b.build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: Router> {
    config:     SimConfig,
    router:     R,
    vertiports: Vec<Vertiport>,
    specs:      Vec<VehicleSpec>,
}

impl<R: Router> SimBuilder<R> {
    pub fn new(config: SimConfig, router: R) -> Self {
        Self { config, router, vertiports: Vec::new(), specs: Vec::new() }
    }

    /// Register a vertiport whose ground layout is `layout` translated by
    /// `offset`.
    pub fn vertiport(
        &mut self,
        name:     impl Into<String>,
        position: Point,
        offset:   Point,
        layout:   Arc<GroundLayout>,
    ) -> VertiportId {
        let id = VertiportId::from_index(self.vertiports.len());
        self.vertiports.push(Vertiport::new(name, position, offset, layout));
        id
    }

    /// Register a vehicle.  Checked at [`build`](Self::build).
    pub fn vehicle(&mut self, spec: VehicleSpec) -> VehicleId {
        let id = VehicleId::from_index(self.specs.len());
        self.specs.push(spec);
        id
    }

    pub fn vertiport_count(&self) -> usize {
        self.vertiports.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.specs.len()
    }

    /// Validate inputs, place every vehicle at its origin, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R>> {
        let clock = self.config.make_clock().map_err(|e| SimError::Config(e.to_string()))?;

        // ── Validate specs before touching any gate ───────────────────────
        let mut commands = CommandIndex::with_capacity(self.specs.len());
        let vertiport_count = self.vertiports.len();
        for (i, spec) in self.specs.iter().enumerate() {
            commands.insert(&spec.name, VehicleId::from_index(i))?;

            let stops = [spec.origin, spec.destination]
                .into_iter()
                .chain(spec.flight_plan.iter().copied());
            for stop in stops {
                if stop.index() >= vertiport_count {
                    return Err(SimError::UnknownVertiport {
                        vehicle:   spec.name.clone(),
                        vertiport: stop,
                    });
                }
            }
            if !(spec.ground_speed.is_finite() && spec.air_speed.is_finite()) {
                return Err(SimError::Config(format!("vehicle {:?} has a non-finite speed", spec.name)));
            }
        }

        // ── Place vehicles in registration order ──────────────────────────
        let mut vertiports = self.vertiports;
        let mut vehicles = Vec::with_capacity(self.specs.len());
        for (i, spec) in self.specs.into_iter().enumerate() {
            vehicles.push(Vehicle::new(VehicleId::from_index(i), spec, &mut vertiports)?);
        }

        Ok(Sim {
            config: self.config,
            clock,
            vertiports,
            vehicles,
            router: self.router,
            commands,
            faults: 0,
        })
    }
}
