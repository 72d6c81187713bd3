//! Ground layout representation and builder.
//!
//! # Data layout
//!
//! A `GroundLayout` is the static half of a vertiport: named nodes with
//! layout-local positions and an undirected adjacency.  One layout is usually
//! shared (`Arc`) by several vertiports, each placing it in its own frame with
//! an offset.
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** form.  Given a `NodeId n`,
//! its neighbours occupy the slice:
//!
//! ```text
//! adj_to[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Neighbour lists are sorted by `NodeId`, so graph expansion order is a pure
//! function of node definition order.
//!
//! # Cost model
//!
//! Every hop costs [`HOP_COST`] regardless of the geometric distance between
//! its endpoints.  Routing therefore minimises hop count.

use rustc_hash::FxHashMap;

use vs_core::{NodeId, Point};

use crate::{GroundError, GroundResult};

/// Cost of traversing one ground edge, in distance units.
pub const HOP_COST: u32 = 10;

// ── GroundLayout ──────────────────────────────────────────────────────────────

/// Undirected ground graph in CSR format plus pad and gate designations.
///
/// Do not construct directly; use [`GroundLayoutBuilder`].
#[derive(Debug, Clone)]
pub struct GroundLayout {
    /// Node names, indexed by `NodeId`.
    pub node_name: Vec<String>,

    /// Layout-local position of each node, indexed by `NodeId`.
    pub node_pos: Vec<Point>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub adj_start: Vec<u32>,

    /// Neighbour targets, grouped by source node, each group sorted ascending.
    pub adj_to: Vec<NodeId>,

    /// Airside departure boundary.
    pub takeoff: NodeId,

    /// Airside arrival boundary.
    pub landing: NodeId,

    /// Gate nodes in definition order.  Gate slot `i` of every vertiport
    /// built from this layout sits on `gates[i]`.
    pub gates: Vec<NodeId>,

    by_name: FxHashMap<String, NodeId>,
}

impl GroundLayout {
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed adjacency entries (twice the undirected link count).
    pub fn adjacency_len(&self) -> usize {
        self.adj_to.len()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Neighbours of `node` in ascending `NodeId` order.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.adj_start[node.index()] as usize;
        let end   = self.adj_start[node.index() + 1] as usize;
        &self.adj_to[start..end]
    }

    #[inline]
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.contains(a) && self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Look up a node by its name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    /// Layout-local position of `node`.
    #[inline]
    pub fn position(&self, node: NodeId) -> Point {
        self.node_pos[node.index()]
    }

    /// Build a layout straight from a named template.
    ///
    /// `links` is an adjacency list: each entry names a node and its
    /// neighbours.  Symmetric duplicates (`a: [b]` and `b: [a]`) collapse to
    /// one undirected link.
    pub fn from_template(
        nodes:   &[(&str, Point)],
        links:   &[(&str, &[&str])],
        takeoff: &str,
        landing: &str,
        gates:   &[&str],
    ) -> GroundResult<GroundLayout> {
        let mut b = GroundLayoutBuilder::with_capacity(nodes.len());
        for &(name, pos) in nodes {
            b.add_node(name, pos);
        }
        for &(from, neighbours) in links {
            let a = b.lookup(from)?;
            for &to in neighbours {
                let c = b.lookup(to)?;
                b.add_link(a, c);
            }
        }
        let t = b.lookup(takeoff)?;
        let l = b.lookup(landing)?;
        b.takeoff(t).landing(l);
        for &gate in gates {
            let g = b.lookup(gate)?;
            b.add_gate(g);
        }
        b.build()
    }
}

// ── GroundLayoutBuilder ───────────────────────────────────────────────────────

/// Construct a [`GroundLayout`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use vs_core::Point;
/// use vs_ground::GroundLayoutBuilder;
///
/// let mut b = GroundLayoutBuilder::new();
/// let pad  = b.add_node("FATO", Point::new(0.0, 0.0));
/// let gate = b.add_node("GATE1", Point::new(10.0, 0.0));
/// b.add_link(pad, gate);
/// b.takeoff(pad).landing(pad).add_gate(gate);
/// let layout = b.build().unwrap();
/// assert_eq!(layout.node_count(), 2);
/// assert_eq!(layout.adjacency_len(), 2); // undirected
/// ```
#[derive(Default)]
pub struct GroundLayoutBuilder {
    names:   Vec<String>,
    nodes:   Vec<Point>,
    links:   Vec<(NodeId, NodeId)>,
    takeoff: Option<NodeId>,
    landing: Option<NodeId>,
    gates:   Vec<NodeId>,
}

impl GroundLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            names: Vec::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
            ..Self::default()
        }
    }

    /// Add a named node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, name: impl Into<String>, pos: Point) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.names.push(name.into());
        self.nodes.push(pos);
        id
    }

    /// Add an undirected link between `a` and `b`.  Self-loops are ignored;
    /// repeated links collapse at build time.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        if a != b {
            self.links.push((a, b));
            self.links.push((b, a));
        }
        self
    }

    pub fn takeoff(&mut self, node: NodeId) -> &mut Self {
        self.takeoff = Some(node);
        self
    }

    pub fn landing(&mut self, node: NodeId) -> &mut Self {
        self.landing = Some(node);
        self
    }

    /// Designate `node` as the next gate (gate order = call order).
    pub fn add_gate(&mut self, node: NodeId) -> &mut Self {
        self.gates.push(node);
        self
    }

    /// Find a node added earlier by name (linear scan; builders are small).
    pub fn lookup(&self, name: &str) -> GroundResult<NodeId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(NodeId::from_index)
            .ok_or_else(|| GroundError::UnknownNode(name.to_owned()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Validate and produce a [`GroundLayout`].
    pub fn build(self) -> GroundResult<GroundLayout> {
        let node_count = self.nodes.len();
        let check = |n: NodeId| {
            if n.index() < node_count { Ok(n) } else { Err(GroundError::NodeNotFound(n)) }
        };

        let mut by_name = FxHashMap::default();
        for (i, name) in self.names.iter().enumerate() {
            if by_name.insert(name.clone(), NodeId::from_index(i)).is_some() {
                return Err(GroundError::DuplicateNode(name.clone()));
            }
        }

        let takeoff = check(self.takeoff.ok_or(GroundError::MissingPad("takeoff"))?)?;
        let landing = check(self.landing.ok_or(GroundError::MissingPad("landing"))?)?;

        for (i, &gate) in self.gates.iter().enumerate() {
            if gate.index() >= node_count || self.gates[..i].contains(&gate) {
                return Err(GroundError::InvalidGate(gate));
            }
        }

        // Sort by (source, target) for CSR and drop repeated links.
        let mut links = self.links;
        for &(a, b) in &links {
            check(a)?;
            check(b)?;
        }
        links.sort_unstable();
        links.dedup();

        let adj_to: Vec<NodeId> = links.iter().map(|&(_, to)| to).collect();

        let mut adj_start = vec![0u32; node_count + 1];
        for &(from, _) in &links {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[node_count] as usize, adj_to.len());

        Ok(GroundLayout {
            node_name: self.names,
            node_pos: self.nodes,
            adj_start,
            adj_to,
            takeoff,
            landing,
            gates: self.gates,
            by_name,
        })
    }
}
