//! Point-to-point path finding.
//!
//! # Pluggability
//!
//! Route composition calls path finding through the [`PathFinder`] trait, so
//! a different search (weighted, A*, precomputed all-pairs table) can replace
//! the default [`BreadthFirstFinder`] without touching the composer.
//!
//! # Cost
//!
//! Every edge costs 1.  Direction labels carry no cost; a left turn and a
//! straight step are the same distance.

use std::collections::VecDeque;

use tracing::trace;

use aisle_core::{EdgeId, NodeId};

use crate::{GraphError, GraphResult, PathSegment, StoreGraph};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable point-to-point search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one finder can serve concurrent
/// route searches (and Rayon workers under `aisle-route/parallel`).
pub trait PathFinder: Send + Sync {
    /// Shortest walk from `start` to `goal`.
    ///
    /// `start == goal` yields the one-node segment `[start]`.  A missing
    /// endpoint or a disconnected pair yields [`GraphError::Unreachable`].
    fn find_path(&self, graph: &StoreGraph, start: &str, goal: &str) -> GraphResult<PathSegment>;
}

// ── BreadthFirstFinder ────────────────────────────────────────────────────────

/// Unweighted BFS over the CSR successor lists.
///
/// Returns a fewest-edges walk.  Among equally short walks the one found
/// first wins, where "first" follows FIFO queue order and each node's
/// `left ++ right ++ straight ++ back` successor order, so results are fully
/// deterministic for a given layout.
pub struct BreadthFirstFinder;

impl PathFinder for BreadthFirstFinder {
    fn find_path(&self, graph: &StoreGraph, start: &str, goal: &str) -> GraphResult<PathSegment> {
        bfs(graph, start, goal)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(graph: &StoreGraph, start: &str, goal: &str) -> GraphResult<PathSegment> {
    let unreachable = || GraphError::Unreachable { from: start.into(), to: goal.into() };

    let (Some(from), Some(to)) = (graph.node_id(start), graph.node_id(goal)) else {
        trace!(start, goal, "endpoint missing from graph");
        return Err(unreachable());
    };
    if from == to {
        return Ok(PathSegment::single(graph.name(from).clone()));
    }

    let n = graph.node_count();
    // prev_edge[v] = edge that first enqueued v.  Recording on first enqueue
    // picks the same parent as marking visited on dequeue would: FIFO order
    // dequeues the earliest-enqueued copy of v first.
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut seen      = vec![false; n];
    seen[from.index()] = true;

    let mut queue = VecDeque::with_capacity(n);
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        if node == to {
            return Ok(reconstruct(graph, &prev_edge, to));
        }
        for edge in graph.out_edges(node) {
            let next = graph.edge_to[edge.index()];
            if !next.is_valid() || seen[next.index()] {
                continue;
            }
            seen[next.index()] = true;
            prev_edge[next.index()] = edge;
            queue.push_back(next);
        }
    }

    Err(unreachable())
}

fn reconstruct(graph: &StoreGraph, prev_edge: &[EdgeId], to: NodeId) -> PathSegment {
    let mut nodes = vec![graph.name(to).clone()];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(graph.name(cur).clone());
    }
    nodes.reverse();
    PathSegment(nodes)
}
