//! Build-once graph cache over a [`WaypointStore`].
//!
//! The layout changes far less often than routes are requested, so the graph
//! is built on first use and handed out as an `Arc<StoreGraph>` snapshot.
//! Readers never block each other and never see a half-built graph.
//!
//! Rebuilds are serialised by a single writer lock.  A rebuild that fails
//! (store unreachable, malformed records) leaves the previous snapshot in
//! place: a stale graph is still served.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use aisle_layout::WaypointStore;

use crate::{GraphError, GraphResult, StoreGraph, StoreGraphBuilder};

pub struct GraphCache<S: WaypointStore> {
    store:   S,
    current: RwLock<Option<Arc<StoreGraph>>>,
    /// Held for the whole load-and-build so concurrent rebuilds queue up.
    writer:  Mutex<()>,
}

impl<S: WaypointStore> GraphCache<S> {
    /// Empty cache; the first [`graph`](Self::graph) call loads the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: RwLock::new(None),
            writer:  Mutex::new(()),
        }
    }

    /// Cache pre-seeded with `graph`, e.g. a fixture.  The store is only read
    /// on [`rebuild`](Self::rebuild).
    pub fn with_graph(store: S, graph: StoreGraph) -> Self {
        Self {
            store,
            current: RwLock::new(Some(Arc::new(graph))),
            writer:  Mutex::new(()),
        }
    }

    /// The cached graph, building it first if nothing is cached yet.
    ///
    /// Returns the same `Arc` on every call until a rebuild succeeds.
    pub fn graph(&self) -> GraphResult<Arc<StoreGraph>> {
        if let Some(graph) = self.cached() {
            return Ok(graph);
        }
        let _writer = self.writer.lock();
        // Another thread may have finished a build while we waited.
        if let Some(graph) = self.cached() {
            return Ok(graph);
        }
        self.build_locked()
    }

    /// Reload the store and replace the cached graph.
    ///
    /// On failure the previous graph (if any) stays cached and
    /// [`GraphError::DataUnavailable`] is returned.
    pub fn rebuild(&self) -> GraphResult<Arc<StoreGraph>> {
        let _writer = self.writer.lock();
        self.build_locked()
    }

    /// Current snapshot without triggering a build.
    pub fn cached(&self) -> Option<Arc<StoreGraph>> {
        self.current.read().clone()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn build_locked(&self) -> GraphResult<Arc<StoreGraph>> {
        let waypoints = match self.store.load_waypoints() {
            Ok(w) => w,
            Err(e) => {
                if self.current.read().is_some() {
                    warn!(error = %e, "waypoint store unavailable; keeping previous graph");
                } else {
                    warn!(error = %e, "waypoint store unavailable; no graph cached");
                }
                return Err(GraphError::DataUnavailable(e));
            }
        };

        let graph = Arc::new(StoreGraphBuilder::from_waypoints(waypoints).build());
        *self.current.write() = Some(Arc::clone(&graph));
        info!(nodes = graph.node_count(), "graph cache updated");
        Ok(graph)
    }
}
