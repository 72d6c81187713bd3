//! Plain data row types written by output backends.

use vs_core::{GateId, VertiportId};
use vs_vehicle::{Transition, Vehicle};

/// Where and in what state one vehicle is at a snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub time:       f64,
    pub vehicle_id: u32,
    pub name:       String,
    pub state:      &'static str,
    pub x:          f64,
    pub y:          f64,
    /// `None` while airborne.
    pub vertiport:  Option<u32>,
    pub gate:       Option<u32>,
}

impl VehicleSnapshotRow {
    pub fn from_vehicle(time: f64, v: &Vehicle) -> Self {
        Self {
            time,
            vehicle_id: v.id.0,
            name:       v.name.clone(),
            state:      v.kind().as_str(),
            x:          v.position.x,
            y:          v.position.y,
            vertiport:  v.current.map(|VertiportId(i)| i),
            gate:       v.gate.map(|GateId(i)| i),
        }
    }
}

/// One state change, or a leg fault (`to == "fault"`).
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRow {
    pub time:       f64,
    pub vehicle_id: u32,
    pub name:       String,
    pub from:       &'static str,
    pub to:         &'static str,
    pub x:          f64,
    pub y:          f64,
}

impl TransitionRow {
    pub const FAULT: &'static str = "fault";

    pub fn from_transition(v: &Vehicle, t: &Transition) -> Self {
        Self {
            time:       t.time,
            vehicle_id: t.vehicle.0,
            name:       v.name.clone(),
            from:       t.from.as_str(),
            to:         t.to.as_str(),
            x:          v.position.x,
            y:          v.position.y,
        }
    }

    pub fn fault(time: f64, v: &Vehicle) -> Self {
        Self {
            time,
            vehicle_id: v.id.0,
            name:       v.name.clone(),
            from:       v.kind().as_str(),
            to:         Self::FAULT,
            x:          v.position.x,
            y:          v.position.y,
        }
    }
}
