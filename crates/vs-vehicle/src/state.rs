//! Per-vehicle state.

use std::fmt;

use vs_core::{NodeId, Point, VertiportId};
use vs_ground::{Route, Vertiport};

/// The planned ground route of one taxi leg and the progress along it.
///
/// `nodes[index]` is the node the vehicle last arrived at; it is moving
/// toward `nodes[index + 1]` (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct GroundLeg {
    pub vertiport: VertiportId,
    pub nodes:     Vec<NodeId>,
    /// World position of each entry in `nodes`.
    pub positions: Vec<Point>,
    pub index:     usize,
}

impl GroundLeg {
    /// Turn a router result into a leg placed in `vp`'s world frame.
    pub fn plan(vertiport: VertiportId, vp: &Vertiport, route: Route) -> Self {
        let positions = route.nodes.iter().map(|&n| vp.node_position(n)).collect();
        Self { vertiport, nodes: route.nodes, positions, index: 0 }
    }

    /// Node the vehicle last arrived at.
    #[inline]
    pub fn current_node(&self) -> NodeId {
        self.nodes[self.index]
    }

    /// Node the vehicle is heading for, or `None` at the end of the leg.
    #[inline]
    pub fn next_node(&self) -> Option<NodeId> {
        self.nodes.get(self.index + 1).copied()
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.index + 1 >= self.nodes.len()
    }
}

/// A direct two-point flight between vertiports.
#[derive(Debug, Clone, PartialEq)]
pub struct AirLeg {
    pub from:     Point,
    pub to:       Point,
    /// Vertiport whose landing pad is `to`.
    pub target:   VertiportId,
    /// Fraction of `from → to` flown, in `[0, 1]`.
    pub progress: f64,
}

impl AirLeg {
    pub fn new(from: Point, to: Point, target: VertiportId) -> Self {
        Self { from, to, target, progress: 0.0 }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::lerp(self.from, self.to, self.progress)
    }
}

/// The vehicle state machine.  Route and progress data only exist in the
/// states that use them.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleState {
    AtGate,
    TakeoffGround(GroundLeg),
    InAir(AirLeg),
    LandingGround(GroundLeg),
    Done,
}

impl VehicleState {
    pub fn kind(&self) -> StateKind {
        match self {
            VehicleState::AtGate           => StateKind::AtGate,
            VehicleState::TakeoffGround(_) => StateKind::TakeoffGround,
            VehicleState::InAir(_)         => StateKind::InAir,
            VehicleState::LandingGround(_) => StateKind::LandingGround,
            VehicleState::Done             => StateKind::Done,
        }
    }

    /// The taxi leg, in either ground state.
    pub fn ground_leg(&self) -> Option<&GroundLeg> {
        match self {
            VehicleState::TakeoffGround(leg) | VehicleState::LandingGround(leg) => Some(leg),
            _ => None,
        }
    }

    pub fn air_leg(&self) -> Option<&AirLeg> {
        match self {
            VehicleState::InAir(leg) => Some(leg),
            _ => None,
        }
    }
}

/// Payload-free state label, for reporting and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    AtGate,
    TakeoffGround,
    InAir,
    LandingGround,
    Done,
}

impl StateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::AtGate        => "at_gate",
            StateKind::TakeoffGround => "takeoff_ground",
            StateKind::InAir         => "in_air",
            StateKind::LandingGround => "landing_ground",
            StateKind::Done          => "done",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
