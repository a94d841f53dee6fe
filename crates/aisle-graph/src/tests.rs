//! Unit tests for aisle-graph.
//!
//! All tests use hand-written layouts so they run without any layout file.

#[cfg(test)]
mod helpers {
    use aisle_core::{Direction, Waypoint, WaypointName};

    use crate::{StoreGraph, StoreGraphBuilder};

    /// Small store:
    ///
    /// ```text
    /// Entrance ─straight→ Produce ─left→ Dairy ─straight→ Checkouts ─straight→ Exit
    ///                       │                               ↑
    ///                       └──right→ Bakery ──────left─────┘
    /// Produce ─back→ Entrance,  Dairy ─back→ Produce,  Bakery ─back→ Produce
    /// Storage (no edges in or out)
    /// ```
    pub fn store_layout() -> Vec<Waypoint> {
        vec![
            Waypoint::new("Entrance").with(Direction::Straight, ["Produce"]),
            Waypoint::new("Produce")
                .with(Direction::Left, ["Dairy"])
                .with(Direction::Right, ["Bakery"])
                .with(Direction::Back, ["Entrance"]),
            Waypoint::new("Dairy")
                .with(Direction::Straight, ["Checkouts"])
                .with(Direction::Back, ["Produce"]),
            Waypoint::new("Bakery")
                .with(Direction::Left, ["Checkouts"])
                .with(Direction::Back, ["Produce"]),
            Waypoint::new("Checkouts").with(Direction::Straight, ["Exit"]),
            Waypoint::new("Exit"),
            Waypoint::new("Storage"),
        ]
    }

    pub fn store_graph() -> StoreGraph {
        StoreGraphBuilder::from_waypoints(store_layout()).build()
    }

    pub fn names(path: &[WaypointName]) -> Vec<&str> {
        path.iter().map(|n| n.as_str()).collect()
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use aisle_core::{Direction, NodeId, Waypoint, WaypointName};

    use crate::{StoreGraph, StoreGraphBuilder};

    use super::helpers::{store_graph, store_layout};

    #[test]
    fn empty_build() {
        let graph = StoreGraph::empty();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn node_ids_follow_record_order() {
        let graph = store_graph();
        assert_eq!(graph.node_id("Entrance"), Some(NodeId(0)));
        assert_eq!(graph.node_id("Storage"), Some(NodeId(6)));
        assert_eq!(graph.node_id("Roof"), None);
        assert_eq!(graph.name(NodeId(2)), "Dairy");
    }

    #[test]
    fn successors_concatenate_left_right_straight_back() {
        let wp = Waypoint::new("Hub")
            .with(Direction::Back, ["D"])
            .with(Direction::Straight, ["C"])
            .with(Direction::Right, ["B"])
            .with(Direction::Left, ["A"]);
        let graph = StoreGraphBuilder::from_waypoints([
            wp,
            Waypoint::new("A"),
            Waypoint::new("B"),
            Waypoint::new("C"),
            Waypoint::new("D"),
        ])
        .build();
        let succ: Vec<&str> = graph.successors("Hub").unwrap().map(|n| n.as_str()).collect();
        assert_eq!(succ, vec!["A", "B", "C", "D"]);
        assert_eq!(graph.out_degree(graph.node_id("Hub").unwrap()), 4);
    }

    #[test]
    fn duplicate_edges_are_preserved() {
        let graph = StoreGraphBuilder::from_waypoints([
            Waypoint::new("Hub")
                .with(Direction::Left, ["A"])
                .with(Direction::Straight, ["A"]),
            Waypoint::new("A"),
        ])
        .build();
        assert_eq!(graph.edge_count(), 2);
        let succ: Vec<&str> = graph.successors("Hub").unwrap().map(|n| n.as_str()).collect();
        assert_eq!(succ, vec!["A", "A"]);
    }

    #[test]
    fn dangling_successor_is_kept_but_unresolved() {
        let graph = StoreGraphBuilder::from_waypoints([
            Waypoint::new("Hub").with(Direction::Left, ["Ghost", "A"]),
            Waypoint::new("A"),
        ])
        .build();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dangling_edge_count(), 1);
        assert!(!graph.edge_to[0].is_valid());
        assert_eq!(graph.edge_target[0], "Ghost");
        assert!(!graph.contains("Ghost"));
    }

    #[test]
    fn later_duplicate_record_replaces_earlier() {
        let graph = StoreGraphBuilder::from_waypoints([
            Waypoint::new("Hub").with(Direction::Left, ["A"]),
            Waypoint::new("A"),
            Waypoint::new("Hub").with(Direction::Right, ["B"]),
            Waypoint::new("B"),
        ])
        .build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node_id("Hub"), Some(NodeId(0)));
        let succ: Vec<&str> = graph.successors("Hub").unwrap().map(|n| n.as_str()).collect();
        assert_eq!(succ, vec!["B"]);
    }

    #[test]
    fn add_waypoint_assigns_dense_ids() {
        let mut b = StoreGraphBuilder::new();
        assert_eq!(b.add_waypoint(Waypoint::new("A")), Some(NodeId(0)));
        assert_eq!(b.add_waypoint(Waypoint::new("B")), Some(NodeId(1)));
        assert_eq!(b.add_waypoint(Waypoint::new("A")), Some(NodeId(0)));
        assert_eq!(b.node_count(), 2);
    }

    #[test]
    fn build_is_idempotent() {
        let a = StoreGraphBuilder::from_waypoints(store_layout()).build();
        let b = StoreGraphBuilder::from_waypoints(store_layout()).build();
        assert_eq!(a, b);
        let names_a: Vec<&WaypointName> = a.names().collect();
        let names_b: Vec<&WaypointName> = b.names().collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn csr_row_pointer_is_consistent() {
        let graph = store_graph();
        assert_eq!(graph.node_out_start.len(), graph.node_count() + 1);
        assert_eq!(*graph.node_out_start.last().unwrap() as usize, graph.edge_count());
        for node in 0..graph.node_count() {
            let id = NodeId(node as u32);
            for e in graph.out_edges(id) {
                assert_eq!(graph.edge_from[e.index()], id);
            }
        }
    }

    #[test]
    fn is_walk_checks_adjacency() {
        let graph = store_graph();
        let walk: Vec<WaypointName> =
            ["Entrance", "Produce", "Dairy"].into_iter().map(Into::into).collect();
        assert!(graph.is_walk(&walk));
        let jump: Vec<WaypointName> = ["Entrance", "Dairy"].into_iter().map(Into::into).collect();
        assert!(!graph.is_walk(&jump));
        assert!(!graph.is_walk(&[]));
    }
}

// ── Path segments ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use aisle_core::WaypointName;

    use crate::PathSegment;

    fn seg(nodes: &[&str]) -> PathSegment {
        PathSegment::from_nodes(nodes.iter().map(|&n| WaypointName::from(n)).collect()).unwrap()
    }

    #[test]
    fn extend_leg_drops_junction() {
        let mut route = seg(&["Entrance", "Produce", "Dairy"]);
        route.extend_leg(&seg(&["Dairy", "Checkouts"]));
        route.extend_leg(&seg(&["Checkouts"]));
        assert_eq!(super::helpers::names(&route), vec!["Entrance", "Produce", "Dairy", "Checkouts"]);
        assert_eq!(route.edge_count(), 3);
        assert_eq!(route.last(), "Checkouts");
    }

    #[test]
    fn empty_nodes_rejected() {
        assert!(PathSegment::from_nodes(vec![]).is_none());
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(seg(&["A", "B"]).to_string(), "A -> B");
    }
}

// ── Breadth-first search ──────────────────────────────────────────────────────

#[cfg(test)]
mod finder {
    use aisle_core::{Direction, Waypoint};

    use crate::{BreadthFirstFinder, GraphError, PathFinder, StoreGraphBuilder};

    use super::helpers::{names, store_graph};

    #[test]
    fn same_node_is_single_node_path() {
        let graph = store_graph();
        for name in ["Entrance", "Storage", "Exit"] {
            let path = BreadthFirstFinder.find_path(&graph, name, name).unwrap();
            assert_eq!(names(&path), vec![name]);
            assert_eq!(path.edge_count(), 0);
        }
    }

    #[test]
    fn shortest_path_through_store() {
        let graph = store_graph();
        let path = BreadthFirstFinder.find_path(&graph, "Entrance", "Exit").unwrap();
        // Dairy and Bakery are both 2 hops from Entrance; left (Dairy) is
        // expanded first.
        assert_eq!(names(&path), vec!["Entrance", "Produce", "Dairy", "Checkouts", "Exit"]);
        assert!(graph.is_walk(&path));
    }

    #[test]
    fn ties_follow_successor_order() {
        let layout = |first: &str, second: &str| {
            StoreGraphBuilder::from_waypoints([
                Waypoint::new("Start")
                    .with(Direction::Left, [first])
                    .with(Direction::Right, [second]),
                Waypoint::new("A").with(Direction::Straight, ["Goal"]),
                Waypoint::new("B").with(Direction::Straight, ["Goal"]),
                Waypoint::new("Goal"),
            ])
            .build()
        };
        let via_a = BreadthFirstFinder.find_path(&layout("A", "B"), "Start", "Goal").unwrap();
        assert_eq!(names(&via_a), vec!["Start", "A", "Goal"]);
        let via_b = BreadthFirstFinder.find_path(&layout("B", "A"), "Start", "Goal").unwrap();
        assert_eq!(names(&via_b), vec!["Start", "B", "Goal"]);
    }

    #[test]
    fn parent_is_first_expanded_predecessor() {
        // X is reachable at depth 2 through both P and Q; P is expanded first
        // even though Q lists X earlier in its own successors.
        let graph = StoreGraphBuilder::from_waypoints([
            Waypoint::new("S").with(Direction::Straight, ["P", "Q"]),
            Waypoint::new("P").with(Direction::Back, ["X"]),
            Waypoint::new("Q").with(Direction::Left, ["X"]),
            Waypoint::new("X"),
        ])
        .build();
        let path = BreadthFirstFinder.find_path(&graph, "S", "X").unwrap();
        assert_eq!(names(&path), vec!["S", "P", "X"]);
    }

    #[test]
    fn edges_are_directed() {
        let graph = store_graph();
        let err = BreadthFirstFinder.find_path(&graph, "Exit", "Entrance").unwrap_err();
        assert!(matches!(err, GraphError::Unreachable { .. }));
    }

    #[test]
    fn isolated_node_is_unreachable() {
        let graph = store_graph();
        let err = BreadthFirstFinder.find_path(&graph, "Entrance", "Storage").unwrap_err();
        match err {
            GraphError::Unreachable { from, to } => {
                assert_eq!(from, "Entrance");
                assert_eq!(to, "Storage");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_endpoint_is_unreachable() {
        let graph = store_graph();
        assert!(BreadthFirstFinder.find_path(&graph, "Roof", "Exit").is_err());
        assert!(BreadthFirstFinder.find_path(&graph, "Entrance", "Roof").is_err());
        assert!(BreadthFirstFinder.find_path(&graph, "Roof", "Roof").is_err());
    }

    #[test]
    fn dangling_edges_are_skipped() {
        let graph = StoreGraphBuilder::from_waypoints([
            Waypoint::new("Start").with(Direction::Left, ["Ghost", "Mid"]),
            Waypoint::new("Mid").with(Direction::Left, ["Ghost", "Goal"]),
            Waypoint::new("Goal"),
        ])
        .build();
        let path = BreadthFirstFinder.find_path(&graph, "Start", "Goal").unwrap();
        assert_eq!(names(&path), vec!["Start", "Mid", "Goal"]);
        assert!(BreadthFirstFinder.find_path(&graph, "Start", "Ghost").is_err());
    }

    #[test]
    fn cycles_terminate() {
        let graph = StoreGraphBuilder::from_waypoints([
            Waypoint::new("A").with(Direction::Left, ["B"]),
            Waypoint::new("B").with(Direction::Left, ["A", "A"]),
            Waypoint::new("C"),
        ])
        .build();
        assert!(BreadthFirstFinder.find_path(&graph, "A", "C").is_err());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let graph = store_graph();
        let first = BreadthFirstFinder.find_path(&graph, "Entrance", "Exit").unwrap();
        for _ in 0..10 {
            assert_eq!(BreadthFirstFinder.find_path(&graph, "Entrance", "Exit").unwrap(), first);
        }
    }
}

// ── Graph cache ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use std::sync::Arc;

    use aisle_layout::{InMemoryWaypointStore, JsonWaypointStore};

    use crate::{BreadthFirstFinder, GraphCache, GraphError, PathFinder, StoreGraph, StoreGraphBuilder};

    use super::helpers::store_layout;

    #[test]
    fn builds_once_and_shares_snapshot() {
        let cache = GraphCache::new(InMemoryWaypointStore::new(store_layout()));
        assert!(cache.cached().is_none());
        let a = cache.graph().unwrap();
        let b = cache.graph().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.node_count(), 7);
    }

    #[test]
    fn rebuild_matches_first_build() {
        let cache = GraphCache::new(InMemoryWaypointStore::new(store_layout()));
        let a = cache.graph().unwrap();
        let b = cache.rebuild().unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
    }

    #[test]
    fn rebuild_picks_up_layout_edits() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"[{"name":"A"}]"#).unwrap();
        let cache = GraphCache::new(JsonWaypointStore::new(file.path()));
        assert_eq!(cache.graph().unwrap().node_count(), 1);

        std::fs::write(file.path(), r#"[{"name":"A"},{"name":"B"}]"#).unwrap();
        assert_eq!(cache.graph().unwrap().node_count(), 1, "cached until rebuild");
        assert_eq!(cache.rebuild().unwrap().node_count(), 2);
        assert_eq!(cache.graph().unwrap().node_count(), 2);
    }

    #[test]
    fn loose_json_records_still_build() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"[
                {"name":"A","directions":{"left":["","B"],"straight":[" C "]}},
                {"name":"B","directions":null},
                {"name":" C "}
            ]"#,
        )
        .unwrap();
        let cache = GraphCache::new(JsonWaypointStore::new(file.path()));
        let graph = cache.graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.dangling_edge_count(), 1);

        let to_c = BreadthFirstFinder.find_path(&graph, "A", " C ").unwrap();
        assert_eq!(to_c.edge_count(), 1);
    }

    #[test]
    fn failed_rebuild_keeps_stale_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"[{"name":"A"}]"#).unwrap();
        let cache = GraphCache::new(JsonWaypointStore::new(&path));
        let before = cache.graph().unwrap();

        std::fs::remove_file(&path).unwrap();
        let err = cache.rebuild().unwrap_err();
        assert!(matches!(err, GraphError::DataUnavailable(_)));

        let after = cache.graph().unwrap();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn unavailable_store_caches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = GraphCache::new(JsonWaypointStore::new(dir.path().join("absent.json")));
        assert!(matches!(cache.graph(), Err(GraphError::DataUnavailable(_))));
        assert!(cache.cached().is_none());
    }

    #[test]
    fn seeded_cache_does_not_touch_store() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = StoreGraphBuilder::from_waypoints(store_layout()).build();
        let cache = GraphCache::with_graph(JsonWaypointStore::new(dir.path().join("absent.json")), fixture);
        assert_eq!(cache.graph().unwrap().node_count(), 7);
        assert!(cache.rebuild().is_err());
        assert_eq!(cache.graph().unwrap().node_count(), 7);
    }

    #[test]
    fn concurrent_readers_share_one_build() {
        let cache = Arc::new(GraphCache::new(InMemoryWaypointStore::new(store_layout())));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.graph().unwrap())
            })
            .collect();
        let graphs: Vec<Arc<StoreGraph>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for g in &graphs[1..] {
            assert!(Arc::ptr_eq(&graphs[0], g));
        }
    }
}
