//! A vertiport: a ground layout placed in the world plus its mutable
//! resource tables.
//!
//! The resource tables are arena-indexed: node occupancy is a `Vec` indexed
//! by `NodeId`, gates a `Vec` of [`GateSlot`]s indexed by `GateId`.  Holders
//! are recorded as `VehicleId`s, never as references to vehicles.
//!
//! # Invariants
//!
//! - A node is held by at most one vehicle.
//! - A gate's `occupant` and the occupancy of its node agree whenever the
//!   gate is occupied: `gate.occupant == Some(v)` implies
//!   `node_holder(gate.node) == Some(v)`.

use std::sync::Arc;

use vs_core::{GateId, NodeId, Point, VehicleId};

use crate::GroundLayout;

/// One parking slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSlot {
    /// The layout node the gate sits on.
    pub node:     NodeId,
    pub occupant: Option<VehicleId>,
    /// World position (layout position + vertiport offset).
    pub position: Point,
}

/// A vertiport and its exclusive ground resources.
#[derive(Debug, Clone)]
pub struct Vertiport {
    pub name: String,

    /// Position in the airspace frame (used for display and summaries).
    pub position: Point,

    /// Translation from layout-local coordinates into this vertiport's frame.
    pub offset: Point,

    pub layout: Arc<GroundLayout>,

    /// Node holder per `NodeId`.
    occupancy: Vec<Option<VehicleId>>,

    /// Gates in layout definition order.
    gates: Vec<GateSlot>,
}

impl Vertiport {
    /// Place `layout` in the world at `offset`, with every node and gate free.
    pub fn new(
        name:     impl Into<String>,
        position: Point,
        offset:   Point,
        layout:   Arc<GroundLayout>,
    ) -> Self {
        let gates = layout
            .gates
            .iter()
            .map(|&node| GateSlot {
                node,
                occupant: None,
                position: layout.position(node).translate(offset),
            })
            .collect();
        Self {
            name: name.into(),
            position,
            offset,
            occupancy: vec![None; layout.node_count()],
            gates,
            layout,
        }
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// World position of a layout node.
    #[inline]
    pub fn node_position(&self, node: NodeId) -> Point {
        self.layout.position(node).translate(self.offset)
    }

    pub fn takeoff_node(&self) -> NodeId {
        self.layout.takeoff
    }

    pub fn landing_node(&self) -> NodeId {
        self.layout.landing
    }

    pub fn takeoff_position(&self) -> Point {
        self.node_position(self.layout.takeoff)
    }

    pub fn landing_position(&self) -> Point {
        self.node_position(self.layout.landing)
    }

    // ── Node reservation ──────────────────────────────────────────────────

    /// Hold `node` for `vehicle` iff nobody holds it.  Never blocks.
    pub fn reserve_node(&mut self, vehicle: VehicleId, node: NodeId) -> bool {
        match self.occupancy.get_mut(node.index()) {
            Some(slot @ None) => {
                *slot = Some(vehicle);
                true
            }
            _ => false,
        }
    }

    /// Free `node` iff `vehicle` holds it.  Returns `false` (and changes
    /// nothing) otherwise, so speculative calls are safe.
    pub fn release_node(&mut self, vehicle: VehicleId, node: NodeId) -> bool {
        match self.occupancy.get_mut(node.index()) {
            Some(slot) if *slot == Some(vehicle) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Current holder of `node`, if any.
    #[inline]
    pub fn node_holder(&self, node: NodeId) -> Option<VehicleId> {
        self.occupancy.get(node.index()).copied().flatten()
    }

    /// `true` if `node` is free or already held by `vehicle`.
    #[inline]
    pub fn node_available_to(&self, vehicle: VehicleId, node: NodeId) -> bool {
        match self.occupancy.get(node.index()) {
            Some(holder) => holder.is_none() || *holder == Some(vehicle),
            None => false,
        }
    }

    // ── Gates ─────────────────────────────────────────────────────────────

    /// Assign the first free gate, in definition order, to `vehicle`.
    ///
    /// Marks both the gate and its node as held.  A gate whose node is
    /// currently held by a taxiing vehicle counts as busy.
    pub fn request_gate(&mut self, vehicle: VehicleId) -> Option<GateId> {
        let idx = self.gates.iter().position(|g| {
            g.occupant.is_none() && self.occupancy[g.node.index()].is_none()
        })?;
        let gate = &mut self.gates[idx];
        gate.occupant = Some(vehicle);
        self.occupancy[gate.node.index()] = Some(vehicle);
        Some(GateId::from_index(idx))
    }

    /// Free whichever gate `vehicle` occupies, along with its node.
    pub fn release_gate(&mut self, vehicle: VehicleId) -> Option<GateId> {
        let idx = self.gates.iter().position(|g| g.occupant == Some(vehicle))?;
        let gate = &mut self.gates[idx];
        gate.occupant = None;
        let node = gate.node;
        self.release_node(vehicle, node);
        Some(GateId::from_index(idx))
    }

    /// The gate `vehicle` currently occupies.
    pub fn gate_held_by(&self, vehicle: VehicleId) -> Option<GateId> {
        self.gates
            .iter()
            .position(|g| g.occupant == Some(vehicle))
            .map(GateId::from_index)
    }

    pub fn gate(&self, gate: GateId) -> Option<&GateSlot> {
        self.gates.get(gate.index())
    }

    pub fn gates(&self) -> &[GateSlot] {
        &self.gates
    }

    pub fn gate_occupant(&self, gate: GateId) -> Option<VehicleId> {
        self.gate(gate).and_then(|g| g.occupant)
    }

    /// Layout node under `gate`.  Panics on an id not issued by this vertiport.
    pub fn gate_node(&self, gate: GateId) -> NodeId {
        self.gates[gate.index()].node
    }

    /// World position of `gate`.  Panics on an id not issued by this vertiport.
    pub fn gate_position(&self, gate: GateId) -> Point {
        self.gates[gate.index()].position
    }

    pub fn free_gate_count(&self) -> usize {
        self.gates.iter().filter(|g| g.occupant.is_none()).count()
    }

    /// Iterate `(node, holder)` over every held node.
    pub fn held_nodes(&self) -> impl Iterator<Item = (NodeId, VehicleId)> + '_ {
        self.occupancy
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.map(|v| (NodeId::from_index(i), v)))
    }
}
