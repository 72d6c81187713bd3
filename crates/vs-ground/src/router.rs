//! Routing trait and default uniform-cost implementation.
//!
//! # Pluggability
//!
//! Vehicles plan ground legs through the [`Router`] trait, so applications
//! can swap in another search (A* on geometric length, a congestion-aware
//! model) without touching the vehicle state machine.  The default
//! [`UniformCostRouter`] is what the simulator uses.
//!
//! # Cost units
//!
//! Every hop costs [`HOP_COST`](crate::HOP_COST), so `Route::cost` is always
//! `hops * HOP_COST`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use vs_core::NodeId;

use crate::layout::{GroundLayout, HOP_COST};
use crate::GroundError;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the node sequence from start to goal,
/// both inclusive, and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub cost:  u32,
}

impl Route {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// `true` if start and goal are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable ground routing engine.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` over `layout`.
    ///
    /// `from == to` yields a single-node route.  A goal with no path from the
    /// start yields [`GroundError::NoRoute`].
    fn route(
        &self,
        layout: &GroundLayout,
        from:   NodeId,
        to:     NodeId,
    ) -> Result<Route, GroundError>;
}

// ── UniformCostRouter ─────────────────────────────────────────────────────────

/// Dijkstra's algorithm specialised to equal edge weights.
///
/// With uniform costs this explores in breadth-first order.  The heap key is
/// `(cost, NodeId)`, so among equal-cost frontier nodes the one defined first
/// in the layout expands first, and a node's predecessor is the first node to
/// reach it at its final cost.  Results are therefore reproducible for a given
/// layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostRouter;

impl Router for UniformCostRouter {
    fn route(
        &self,
        layout: &GroundLayout,
        from:   NodeId,
        to:     NodeId,
    ) -> Result<Route, GroundError> {
        uniform_cost(layout, from, to)
    }
}

fn uniform_cost(layout: &GroundLayout, from: NodeId, to: NodeId) -> Result<Route, GroundError> {
    for n in [from, to] {
        if !layout.contains(n) {
            return Err(GroundError::NodeNotFound(n));
        }
    }
    if from == to {
        return Ok(Route { nodes: vec![from], cost: 0 });
    }

    let n = layout.node_count();
    let mut dist = vec![u32::MAX; n];
    // prev[v] = node that first reached v at its best cost.
    let mut prev = vec![NodeId::INVALID; n];

    dist[from.index()] = 0;

    // Reverse turns the max-heap into a min-heap; NodeId is the tie-break.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(&prev, from, to, cost));
        }

        // Stale entry.
        if cost > dist[node.index()] {
            continue;
        }

        for &neighbor in layout.neighbors(node) {
            let new_cost = cost.saturating_add(HOP_COST);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(GroundError::NoRoute { from, to })
}

fn reconstruct(prev: &[NodeId], from: NodeId, to: NodeId, cost: u32) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Route { nodes, cost }
}
