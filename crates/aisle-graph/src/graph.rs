//! Store graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** form.  Given a
//! `NodeId n`, its successor entries occupy
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! in `left ++ right ++ straight ++ back` order, duplicates kept.  That order
//! is the BFS tie-break, so the builder never sorts or deduplicates edges.
//!
//! # Dangling successors
//!
//! A successor name with no waypoint record is kept (its name survives in
//! `edge_target`) but resolves to `NodeId::INVALID` in `edge_to`, so
//! traversal skips it.  The builder logs each distinct dangling name once.

use std::collections::HashSet;

use tracing::{info, warn};

use aisle_core::{EdgeId, NodeId, Waypoint, WaypointName};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<WaypointName, NodeId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<WaypointName, NodeId>;

// ── StoreGraph ────────────────────────────────────────────────────────────────

/// Directed waypoint graph in CSR format.
///
/// Immutable once built; share it as `Arc<StoreGraph>`.  Construct with
/// [`StoreGraphBuilder`].
#[derive(Debug, PartialEq)]
pub struct StoreGraph {
    /// Waypoint name of each node.  Indexed by `NodeId`.
    pub node_name: Vec<WaypointName>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge (for path reconstruction).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge; `NodeId::INVALID` when dangling.
    pub edge_to: Vec<NodeId>,

    /// Destination name of each edge as written in the layout.
    pub edge_target: Vec<WaypointName>,

    index: NameIndex,
}

impl StoreGraph {
    pub fn empty() -> Self {
        StoreGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_name.is_empty()
    }

    /// Number of successor entries that name no known waypoint.
    pub fn dangling_edge_count(&self) -> usize {
        self.edge_to.iter().filter(|n| !n.is_valid()).count()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Name of `node`.  Panics on an id from another graph.
    pub fn name(&self, node: NodeId) -> &WaypointName {
        &self.node_name[node.index()]
    }

    /// All waypoint names, in `NodeId` order.
    pub fn names(&self) -> impl Iterator<Item = &WaypointName> + '_ {
        self.node_name.iter()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `EdgeId`s of all outgoing entries of `node`, in successor order.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Successor names of `name` (dangling ones included), or `None` if the
    /// waypoint is not in the graph.
    pub fn successors(&self, name: &str) -> Option<impl Iterator<Item = &WaypointName> + '_> {
        let node = self.node_id(name)?;
        Some(self.out_edges(node).map(move |e| &self.edge_target[e.index()]))
    }

    /// `true` if every consecutive pair in `walk` is joined by an edge.
    pub fn is_walk(&self, walk: &[WaypointName]) -> bool {
        if walk.is_empty() {
            return false;
        }
        if !walk.iter().all(|n| self.contains(n)) {
            return false;
        }
        walk.windows(2).all(|pair| {
            self.successors(&pair[0])
                .is_some_and(|mut succ| succ.any(|s| *s == pair[1]))
        })
    }
}

// ── StoreGraphBuilder ─────────────────────────────────────────────────────────

/// Collect waypoint records, then call [`build`](Self::build).
///
/// Records keep first-seen order for `NodeId` assignment.  A record whose
/// name was already added replaces the earlier record's successors.
///
/// # Example
///
/// ```
/// use aisle_core::{Direction, Waypoint};
/// use aisle_graph::StoreGraphBuilder;
///
/// let graph = StoreGraphBuilder::from_waypoints([
///     Waypoint::new("Entrance").with(Direction::Straight, ["Dairy"]),
///     Waypoint::new("Dairy"),
/// ])
/// .build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct StoreGraphBuilder {
    waypoints: Vec<Waypoint>,
    index:     NameIndex,
}

impl StoreGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_waypoints<I: IntoIterator<Item = Waypoint>>(waypoints: I) -> Self {
        let mut b = Self::new();
        for wp in waypoints {
            if b.add_waypoint(wp).is_none() {
                warn!(nodes = b.node_count(), "store graph is full; remaining records dropped");
                break;
            }
        }
        b
    }

    /// Add a waypoint record and return its `NodeId`, or `None` once every
    /// id below `NodeId::INVALID` is taken.
    pub fn add_waypoint(&mut self, waypoint: Waypoint) -> Option<NodeId> {
        if let Some(&id) = self.index.get(waypoint.name.as_str()) {
            warn!(waypoint = %waypoint.name, "duplicate waypoint record; later record wins");
            self.waypoints[id.index()] = waypoint;
            return Some(id);
        }
        let id = NodeId::from_index(self.waypoints.len())?;
        self.index.insert(waypoint.name.clone(), id);
        self.waypoints.push(waypoint);
        Some(id)
    }

    pub fn node_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Consume the builder and produce a [`StoreGraph`].  O(N + E).
    pub fn build(self) -> StoreGraph {
        let node_count = self.waypoints.len();
        let edge_count: usize = self.waypoints.iter().map(|w| w.directions.len()).sum();

        let mut node_out_start = Vec::with_capacity(node_count + 1);
        let mut edge_from      = Vec::with_capacity(edge_count);
        let mut edge_to        = Vec::with_capacity(edge_count);
        let mut edge_target    = Vec::with_capacity(edge_count);
        let mut dangling: HashSet<&str> = HashSet::new();

        node_out_start.push(0u32);
        // Ids were range-checked by `add_waypoint`.
        for (i, wp) in self.waypoints.iter().enumerate() {
            let from = NodeId(i as u32);
            for succ in wp.directions.successors() {
                let to = match self.index.get(succ.as_str()) {
                    Some(&id) => id,
                    None => {
                        if dangling.insert(succ.as_str()) {
                            warn!(from = %wp.name, to = %succ, "successor names no waypoint; edge ignored");
                        }
                        NodeId::INVALID
                    }
                };
                edge_from.push(from);
                edge_to.push(to);
                edge_target.push(succ.clone());
            }
            node_out_start.push(edge_to.len() as u32);
        }
        debug_assert_eq!(edge_to.len(), edge_count);

        info!(
            nodes = node_count,
            edges = edge_count,
            dangling = dangling.len(),
            "store graph built"
        );

        StoreGraph {
            node_name: self.waypoints.into_iter().map(|w| w.name).collect(),
            node_out_start,
            edge_from,
            edge_to,
            edge_target,
            index: self.index,
        }
    }
}
