//! The `Vehicle`: identity, flight plan and the per-tick state machine.

use std::collections::VecDeque;

use log::{debug, info, trace};

use vs_core::{
    GateId, Point, REACH_TOLERANCE, TURNAROUND_SECS, VehicleId, VertiportId, move_towards,
    reached,
};
use vs_ground::{Router, Vertiport};

use crate::{AirLeg, GroundLeg, StateKind, VehicleError, VehicleResult, VehicleState};

// ── Construction inputs ───────────────────────────────────────────────────────

/// Everything needed to create a vehicle.
///
/// `flight_plan` lists the destinations after `destination`, in visiting
/// order; for a round trip its last entry is `origin`.  A plan that repeats
/// `destination` as its first entry is also accepted: that entry names the
/// leg being set up and is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSpec {
    pub name:           String,
    pub origin:         VertiportId,
    pub destination:    VertiportId,
    pub departure_time: f64,
    pub ground_speed:   f64,
    pub air_speed:      f64,
    pub flight_plan:    Vec<VertiportId>,
}

impl VehicleSpec {
    /// Default ground and air speed, in distance units per second.
    pub const DEFAULT_SPEED: f64 = 1.34;

    /// Fly `plan` in order starting from `origin`.  The first entry becomes
    /// the initial destination.  Returns `None` for an empty plan.
    pub fn from_plan(
        name:           impl Into<String>,
        origin:         VertiportId,
        departure_time: f64,
        plan:           &[VertiportId],
    ) -> Option<Self> {
        let (&destination, rest) = plan.split_first()?;
        Some(Self {
            name: name.into(),
            origin,
            destination,
            departure_time,
            ground_speed: Self::DEFAULT_SPEED,
            air_speed: Self::DEFAULT_SPEED,
            flight_plan: rest.to_vec(),
        })
    }

    pub fn speeds(mut self, ground: f64, air: f64) -> Self {
        self.ground_speed = ground;
        self.air_speed = air;
        self
    }
}

// ── Reporting types ───────────────────────────────────────────────────────────

/// A state change, reported by [`Vehicle::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub vehicle: VehicleId,
    pub from:    StateKind,
    pub to:      StateKind,
    pub time:    f64,
}

/// Per-tick observable view of a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshot {
    pub id:        VehicleId,
    pub name:      String,
    pub state:     StateKind,
    pub position:  Point,
    pub vertiport: Option<VertiportId>,
    pub gate:      Option<GateId>,
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id:   VehicleId,
    pub name: String,

    pub ground_speed: f64,
    pub air_speed:    f64,

    /// Vertiport the current leg departs from.
    pub origin: VertiportId,
    /// Vertiport the current leg flies to.
    pub destination: VertiportId,
    /// Destinations after `destination`, visited front to back.
    pub flight_plan: VecDeque<VertiportId>,

    /// Vertiport the vehicle is physically at; `None` while airborne.
    pub current:  Option<VertiportId>,
    pub position: Point,
    /// Gate held at `current`.
    pub gate:     Option<GateId>,

    /// The vehicle may leave its gate at or after this time.
    pub departure_time: f64,

    pub state: VehicleState,

    /// Air legs started so far.
    pub air_legs: u32,

    fault: Option<VehicleError>,
}

impl Vehicle {
    /// Create a vehicle at `spec.origin` and try to park it at a gate there.
    ///
    /// Without a free gate the vehicle waits at the origin's takeoff pad
    /// position and keeps polling from its first update.
    pub fn new(
        id:         VehicleId,
        spec:       VehicleSpec,
        vertiports: &mut [Vertiport],
    ) -> VehicleResult<Self> {
        let known = |v: VertiportId| {
            if v.index() < vertiports.len() { Ok(v) } else { Err(VehicleError::UnknownVertiport(v)) }
        };
        known(spec.origin)?;
        known(spec.destination)?;
        for &stop in &spec.flight_plan {
            known(stop)?;
        }

        let mut flight_plan: VecDeque<VertiportId> = spec.flight_plan.into();
        if flight_plan.front() == Some(&spec.destination) {
            flight_plan.pop_front();
        }

        let vp = &mut vertiports[spec.origin.index()];
        let gate = vp.request_gate(id);
        let position = match gate {
            Some(g) => vp.gate_position(g),
            None    => vp.takeoff_position(),
        };

        Ok(Self {
            id,
            name: spec.name,
            ground_speed: spec.ground_speed,
            air_speed: spec.air_speed,
            origin: spec.origin,
            destination: spec.destination,
            flight_plan,
            current: Some(spec.origin),
            position,
            gate,
            departure_time: spec.departure_time,
            state: VehicleState::AtGate,
            air_legs: 0,
            fault: None,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// `true` while the vehicle still takes part in ticks: not `Done` and
    /// not parked by a leg fault.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.fault.is_none() && self.kind() != StateKind::Done
    }

    /// The fault that aborted this vehicle's leg, if any.
    pub fn fault(&self) -> Option<&VehicleError> {
        self.fault.as_ref()
    }

    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            id:        self.id,
            name:      self.name.clone(),
            state:     self.kind(),
            position:  self.position,
            vertiport: self.current,
            gate:      self.gate,
        }
    }

    // ── External override ─────────────────────────────────────────────────

    /// Apply a raw command.  `speed` replaces both ground and air speed;
    /// `target` replaces the destination of the current leg.  An airborne
    /// vehicle turns toward the new target's landing pad immediately.
    ///
    /// Nothing is validated beyond `target` naming a vertiport in
    /// `vertiports`; the caller guarantees that.
    pub fn apply_command(
        &mut self,
        target:     Option<VertiportId>,
        speed:      Option<f64>,
        vertiports: &[Vertiport],
    ) {
        if let Some(s) = speed {
            self.ground_speed = s;
            self.air_speed = s;
        }
        if let Some(t) = target {
            self.destination = t;
            if let VehicleState::InAir(air) = &mut self.state {
                *air = AirLeg::new(self.position, vertiports[t.index()].landing_position(), t);
            }
        }
        debug!("{}: command applied (target {:?}, speed {:?})", self.name, target, speed);
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance this vehicle by one tick of length `dt` ending at `now`.
    ///
    /// Returns the state transition taken this tick, if any.  An unreachable
    /// ground route aborts the leg: the fault is recorded, the vehicle stops
    /// updating, and the error is returned this once.
    pub fn update<R: Router + ?Sized>(
        &mut self,
        dt:         f64,
        now:        f64,
        vertiports: &mut [Vertiport],
        router:     &R,
    ) -> VehicleResult<Option<Transition>> {
        if !self.is_live() {
            return Ok(None);
        }

        let from = self.kind();
        let step = match from {
            StateKind::AtGate => self.step_at_gate(now, vertiports, router),
            StateKind::TakeoffGround | StateKind::LandingGround => {
                self.step_taxi(dt, now, vertiports)
            }
            StateKind::InAir => self.step_in_air(dt, vertiports, router),
            StateKind::Done => Ok(None),
        };

        let next = match step {
            Ok(next) => next,
            Err(e) => {
                debug!("{}: leg aborted at t={now:.1}", self.name);
                self.fault = Some(e.clone());
                return Err(e);
            }
        };

        let Some(next) = next else {
            return Ok(None);
        };
        self.state = next;
        let to = self.kind();
        debug!("{}: {from} -> {to} at t={now:.1} {}", self.name, self.position);
        Ok(Some(Transition { vehicle: self.id, from, to, time: now }))
    }

    fn step_at_gate<R: Router + ?Sized>(
        &mut self,
        now:        f64,
        vertiports: &mut [Vertiport],
        router:     &R,
    ) -> VehicleResult<Option<VehicleState>> {
        let here = self.origin;
        let vp = &mut vertiports[here.index()];

        let gate = match self.gate {
            Some(g) => g,
            None => match vp.request_gate(self.id) {
                Some(g) => {
                    self.gate = Some(g);
                    self.position = vp.gate_position(g);
                    g
                }
                None => {
                    trace!("{}: no free gate at {}", self.name, vp.name);
                    return Ok(None);
                }
            },
        };

        if now < self.departure_time {
            return Ok(None);
        }

        // Route first so a failed plan leaves the gate untouched.
        let route = router
            .route(&vp.layout, vp.gate_node(gate), vp.takeoff_node())
            .map_err(|source| VehicleError::UnreachableRoute {
                vehicle: self.id,
                vertiport: here,
                source,
            })?;

        vp.release_gate(self.id);
        self.gate = None;
        // The first route node is the gate node that was just freed.
        vp.reserve_node(self.id, route.nodes[0]);

        Ok(Some(VehicleState::TakeoffGround(GroundLeg::plan(here, vp, route))))
    }

    fn step_taxi(
        &mut self,
        dt:         f64,
        now:        f64,
        vertiports: &mut [Vertiport],
    ) -> VehicleResult<Option<VehicleState>> {
        let id = self.id;
        let (leg, landing) = match &mut self.state {
            VehicleState::TakeoffGround(leg) => (leg, false),
            VehicleState::LandingGround(leg) => (leg, true),
            _ => return Ok(None),
        };
        let vp = &mut vertiports[leg.vertiport.index()];

        if let Some(next) = leg.next_node() {
            if !vp.node_available_to(id, next) {
                trace!("{}: waiting for {} at {}", self.name, vp.layout.name(next), vp.name);
                return Ok(None);
            }
            if vp.node_holder(next).is_none() {
                vp.reserve_node(id, next);
            }

            let target = leg.positions[leg.index + 1];
            self.position = move_towards(self.position, target, self.ground_speed, dt);
            if reached(self.position, target, REACH_TOLERANCE) {
                self.position = target;
                vp.release_node(id, leg.current_node());
                leg.index += 1;
            }
            return Ok(None);
        }

        if !landing {
            // On the takeoff pad: leave the ground.
            vp.release_node(id, leg.current_node());
            let from = vp.takeoff_position();
            let to = vertiports[self.destination.index()].landing_position();
            self.current = None;
            self.air_legs += 1;
            return Ok(Some(VehicleState::InAir(AirLeg::new(from, to, self.destination))));
        }

        // Landing leg ends on the gate node.
        let gate_pos = leg.positions[leg.index];
        if !reached(self.position, gate_pos, REACH_TOLERANCE) {
            self.position = move_towards(self.position, gate_pos, self.ground_speed, dt);
            return Ok(None);
        }
        self.position = gate_pos;

        let here = leg.vertiport;
        match self.flight_plan.pop_front() {
            Some(next_dest) => {
                self.origin = here;
                self.destination = next_dest;
                self.departure_time = now + TURNAROUND_SECS;
                info!(
                    "{}: parked at {}, next leg to {} at t={:.1}",
                    self.name, vp.name, next_dest, self.departure_time
                );
                Ok(Some(VehicleState::AtGate))
            }
            None => {
                info!("{}: flight plan complete at {}", self.name, vp.name);
                Ok(Some(VehicleState::Done))
            }
        }
    }

    fn step_in_air<R: Router + ?Sized>(
        &mut self,
        dt:         f64,
        vertiports: &mut [Vertiport],
        router:     &R,
    ) -> VehicleResult<Option<VehicleState>> {
        let VehicleState::InAir(air) = &mut self.state else {
            return Ok(None);
        };

        if air.progress < 1.0 {
            let total = air.from.distance(air.to);
            if total <= 0.0 {
                air.progress = 1.0;
            } else {
                air.progress += self.air_speed * dt / total;
            }
            if air.progress < 1.0 {
                self.position = air.position();
                return Ok(None);
            }
            air.progress = 1.0;
            self.position = air.to;
        }

        // Overhead the destination: the landing pad and a gate must both be
        // free before touching down, otherwise hold and retry next tick.
        let dest = air.target;
        let vp = &mut vertiports[dest.index()];
        let pad = vp.landing_node();
        if !vp.node_available_to(self.id, pad) {
            trace!("{}: holding, landing pad at {} busy", self.name, vp.name);
            return Ok(None);
        }
        let Some(gate) = vp.request_gate(self.id) else {
            trace!("{}: holding, no free gate at {}", self.name, vp.name);
            return Ok(None);
        };

        let route = match router.route(&vp.layout, pad, vp.gate_node(gate)) {
            Ok(route) => route,
            Err(source) => {
                vp.release_gate(self.id);
                return Err(VehicleError::UnreachableRoute {
                    vehicle: self.id,
                    vertiport: dest,
                    source,
                });
            }
        };

        if vp.node_holder(pad).is_none() {
            vp.reserve_node(self.id, pad);
        }
        self.gate = Some(gate);
        self.current = Some(dest);
        Ok(Some(VehicleState::LandingGround(GroundLeg::plan(dest, vp, route))))
    }
}
