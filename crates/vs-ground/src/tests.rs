//! Unit tests for vs-ground.
//!
//! All tests use hand-built layouts.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use vs_core::Point;

    use crate::{GroundLayout, Vertiport};

    /// A small vertiport layout:
    ///
    /// ```text
    ///   GATE1   GATE2
    ///     |       |
    ///    T1 ---- T2 ---- FATO_Landing
    ///     |
    ///   FATO_Takeoff
    /// ```
    ///
    /// Node ids follow the definition order below.
    pub fn small_layout() -> GroundLayout {
        GroundLayout::from_template(
            &[
                ("FATO_Takeoff", Point::new(0.0, 0.0)),   // 0
                ("FATO_Landing", Point::new(20.0, 10.0)), // 1
                ("T1", Point::new(0.0, 10.0)),            // 2
                ("T2", Point::new(10.0, 10.0)),           // 3
                ("GATE1", Point::new(0.0, 20.0)),         // 4
                ("GATE2", Point::new(10.0, 20.0)),        // 5
            ],
            &[
                ("FATO_Takeoff", &["T1"]),
                ("T1", &["FATO_Takeoff", "T2", "GATE1"]),
                ("T2", &["T1", "FATO_Landing", "GATE2"]),
            ],
            "FATO_Takeoff",
            "FATO_Landing",
            &["GATE1", "GATE2"],
        )
        .unwrap()
    }

    pub fn small_vertiport() -> Vertiport {
        Vertiport::new(
            "A",
            Point::new(5.0, 30.0),
            Point::new(100.0, 0.0),
            Arc::new(small_layout()),
        )
    }
}

// ── Layout construction ───────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use vs_core::{NodeId, Point};

    use crate::{GroundError, GroundLayout, GroundLayoutBuilder};

    #[test]
    fn template_collapses_symmetric_links() {
        let layout = super::helpers::small_layout();
        assert_eq!(layout.node_count(), 6);
        // 5 undirected links → 10 adjacency entries, despite T1/T2 listing
        // some links twice.
        assert_eq!(layout.adjacency_len(), 10);
        assert_eq!(layout.takeoff, NodeId(0));
        assert_eq!(layout.landing, NodeId(1));
        assert_eq!(layout.gates, vec![NodeId(4), NodeId(5)]);
    }

    #[test]
    fn neighbors_sorted_by_id() {
        let layout = super::helpers::small_layout();
        let t2 = layout.node_id("T2").unwrap();
        assert_eq!(layout.neighbors(t2), &[NodeId(1), NodeId(2), NodeId(5)]);
        assert!(layout.are_adjacent(NodeId(2), NodeId(4)));
        assert!(!layout.are_adjacent(NodeId(0), NodeId(4)));
    }

    #[test]
    fn name_lookup() {
        let layout = super::helpers::small_layout();
        assert_eq!(layout.node_id("GATE2"), Some(NodeId(5)));
        assert_eq!(layout.name(NodeId(2)), "T1");
        assert_eq!(layout.node_id("nope"), None);
    }

    #[test]
    fn missing_pad_rejected() {
        let mut b = GroundLayoutBuilder::new();
        let a = b.add_node("A", Point::ORIGIN);
        b.takeoff(a);
        assert_eq!(b.build().unwrap_err(), GroundError::MissingPad("landing"));
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut b = GroundLayoutBuilder::new();
        let a = b.add_node("A", Point::ORIGIN);
        b.add_node("A", Point::new(1.0, 0.0));
        b.takeoff(a).landing(a);
        assert!(matches!(b.build(), Err(GroundError::DuplicateNode(_))));
    }

    #[test]
    fn duplicate_gate_rejected() {
        let mut b = GroundLayoutBuilder::new();
        let a = b.add_node("A", Point::ORIGIN);
        let g = b.add_node("G", Point::new(1.0, 0.0));
        b.takeoff(a).landing(a).add_gate(g).add_gate(g);
        assert_eq!(b.build().unwrap_err(), GroundError::InvalidGate(g));
    }

    #[test]
    fn dangling_link_rejected() {
        let mut b = GroundLayoutBuilder::new();
        let a = b.add_node("A", Point::ORIGIN);
        b.add_link(a, NodeId(9));
        b.takeoff(a).landing(a);
        assert_eq!(b.build().unwrap_err(), GroundError::NodeNotFound(NodeId(9)));
    }

    #[test]
    fn template_unknown_name() {
        let err = GroundLayout::from_template(
            &[("A", Point::ORIGIN)],
            &[("A", &["B"])],
            "A",
            "A",
            &[],
        )
        .unwrap_err();
        assert_eq!(err, GroundError::UnknownNode("B".into()));
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod router {
    use vs_core::{NodeId, Point};

    use crate::{GroundError, GroundLayoutBuilder, HOP_COST, Router, UniformCostRouter};

    #[test]
    fn gate_to_takeoff() {
        let layout = super::helpers::small_layout();
        let from = layout.node_id("GATE2").unwrap();
        let route = UniformCostRouter.route(&layout, from, layout.takeoff).unwrap();
        let names: Vec<_> = route.nodes.iter().map(|&n| layout.name(n)).collect();
        assert_eq!(names, ["GATE2", "T2", "T1", "FATO_Takeoff"]);
        assert_eq!(route.cost, 3 * HOP_COST);
    }

    #[test]
    fn consecutive_nodes_adjacent_and_cost_matches_hops() {
        let layout = super::helpers::small_layout();
        for from in 0..layout.node_count() {
            for to in 0..layout.node_count() {
                let route = UniformCostRouter
                    .route(&layout, NodeId::from_index(from), NodeId::from_index(to))
                    .unwrap();
                assert_eq!(route.nodes.first(), Some(&NodeId::from_index(from)));
                assert_eq!(route.nodes.last(), Some(&NodeId::from_index(to)));
                for pair in route.nodes.windows(2) {
                    assert!(layout.are_adjacent(pair[0], pair[1]));
                }
                assert_eq!(route.cost, route.hops() as u32 * HOP_COST);
            }
        }
    }

    #[test]
    fn same_node_is_trivial() {
        let layout = super::helpers::small_layout();
        let route = UniformCostRouter.route(&layout, NodeId(3), NodeId(3)).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.nodes, vec![NodeId(3)]);
        assert_eq!(route.cost, 0);
    }

    #[test]
    fn disconnected_goal_has_no_route() {
        let mut b = GroundLayoutBuilder::new();
        let t = b.add_node("FATO", Point::ORIGIN);
        let x = b.add_node("X", Point::new(10.0, 0.0));
        let g = b.add_node("GATE", Point::new(50.0, 0.0)); // isolated
        b.add_link(t, x);
        b.takeoff(t).landing(t).add_gate(g);
        let layout = b.build().unwrap();

        let err = UniformCostRouter.route(&layout, g, t).unwrap_err();
        assert_eq!(err, GroundError::NoRoute { from: g, to: t });
    }

    #[test]
    fn unknown_node_errors() {
        let layout = super::helpers::small_layout();
        let err = UniformCostRouter.route(&layout, NodeId(0), NodeId(99)).unwrap_err();
        assert_eq!(err, GroundError::NodeNotFound(NodeId(99)));
    }

    #[test]
    fn equal_cost_ties_break_by_node_id() {
        // Diamond: S connects to A and B, both connect to G.  A is defined
        // before B, so the path through A wins every time.
        let mut b = GroundLayoutBuilder::new();
        let s = b.add_node("S", Point::ORIGIN);
        let a = b.add_node("A", Point::new(0.0, 100.0)); // geometrically longer
        let bb = b.add_node("B", Point::new(1.0, 1.0));
        let g = b.add_node("G", Point::new(2.0, 2.0));
        b.add_link(s, bb).add_link(s, a).add_link(bb, g).add_link(a, g);
        b.takeoff(s).landing(g);
        let layout = b.build().unwrap();

        for _ in 0..5 {
            let route = UniformCostRouter.route(&layout, s, g).unwrap();
            assert_eq!(route.nodes, vec![s, a, g]);
        }
    }
}

// ── Resource table ────────────────────────────────────────────────────────────

#[cfg(test)]
mod resources {
    use vs_core::{GateId, NodeId, Point, VehicleId};

    const V0: VehicleId = VehicleId(0);
    const V1: VehicleId = VehicleId(1);

    #[test]
    fn world_positions_include_offset() {
        let vp = super::helpers::small_vertiport();
        assert_eq!(vp.takeoff_position(), Point::new(100.0, 0.0));
        assert_eq!(vp.landing_position(), Point::new(120.0, 10.0));
        assert_eq!(vp.gate_position(GateId(1)), Point::new(110.0, 20.0));
    }

    #[test]
    fn reserve_is_exclusive() {
        let mut vp = super::helpers::small_vertiport();
        assert!(vp.reserve_node(V0, NodeId(2)));
        assert!(!vp.reserve_node(V1, NodeId(2)));
        // Re-reserving one's own node is also refused; callers check
        // `node_available_to` first.
        assert!(!vp.reserve_node(V0, NodeId(2)));
        assert_eq!(vp.node_holder(NodeId(2)), Some(V0));
        assert!(vp.node_available_to(V0, NodeId(2)));
        assert!(!vp.node_available_to(V1, NodeId(2)));
    }

    #[test]
    fn release_only_by_holder() {
        let mut vp = super::helpers::small_vertiport();
        vp.reserve_node(V0, NodeId(3));
        assert!(!vp.release_node(V1, NodeId(3)));
        assert_eq!(vp.node_holder(NodeId(3)), Some(V0));
        assert!(vp.release_node(V0, NodeId(3)));
        // Second release is a no-op.
        assert!(!vp.release_node(V0, NodeId(3)));
        // Out-of-range ids are harmless.
        assert!(!vp.release_node(V0, NodeId(999)));
        assert!(!vp.reserve_node(V0, NodeId(999)));
    }

    #[test]
    fn gates_assigned_in_definition_order() {
        let mut vp = super::helpers::small_vertiport();
        assert_eq!(vp.request_gate(V0), Some(GateId(0)));
        assert_eq!(vp.request_gate(V1), Some(GateId(1)));
        assert_eq!(vp.request_gate(VehicleId(2)), None);
        assert_eq!(vp.free_gate_count(), 0);
    }

    #[test]
    fn gate_and_node_agree() {
        let mut vp = super::helpers::small_vertiport();
        let g = vp.request_gate(V0).unwrap();
        assert_eq!(vp.gate_occupant(g), Some(V0));
        assert_eq!(vp.node_holder(vp.gate_node(g)), Some(V0));
        assert_eq!(vp.gate_held_by(V0), Some(g));

        assert_eq!(vp.release_gate(V0), Some(g));
        assert_eq!(vp.gate_occupant(g), None);
        assert_eq!(vp.node_holder(vp.gate_node(g)), None);
    }

    #[test]
    fn release_gate_without_one_is_noop() {
        let mut vp = super::helpers::small_vertiport();
        vp.request_gate(V0);
        assert_eq!(vp.release_gate(V1), None);
        assert_eq!(vp.gate_occupant(GateId(0)), Some(V0));
    }

    #[test]
    fn gate_node_held_by_taxiing_vehicle_is_skipped() {
        let mut vp = super::helpers::small_vertiport();
        let gate1_node = vp.gate_node(GateId(0));
        assert!(vp.reserve_node(V0, gate1_node));
        assert_eq!(vp.request_gate(V1), Some(GateId(1)));
        assert_eq!(vp.node_holder(gate1_node), Some(V0));
    }

    #[test]
    fn freed_gate_is_reused_first() {
        let mut vp = super::helpers::small_vertiport();
        vp.request_gate(V0);
        vp.request_gate(V1);
        vp.release_gate(V0);
        assert_eq!(vp.request_gate(VehicleId(7)), Some(GateId(0)));
    }

    #[test]
    fn held_nodes_lists_holders() {
        let mut vp = super::helpers::small_vertiport();
        vp.request_gate(V0);
        vp.reserve_node(V1, NodeId(2));
        let held: Vec<_> = vp.held_nodes().collect();
        assert_eq!(held, vec![(NodeId(2), V1), (NodeId(4), V0)]);
    }
}
