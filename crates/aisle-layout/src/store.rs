//! Waypoint stores: the read-only source of layout records.
//!
//! `aisle-graph` only ever calls [`WaypointStore::load_waypoints`], so any
//! backing (file, database, embedded fixture) plugs in by implementing that
//! one method.

use std::path::{Path, PathBuf};

use tracing::debug;

use aisle_core::Waypoint;

use crate::{LayoutResult, load_waypoints_csv, load_waypoints_json};

/// Read access to every persisted waypoint.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the graph cache holding the store
/// is shared across request threads.
pub trait WaypointStore: Send + Sync {
    /// Return all waypoint records.  Errors mean the store is unreachable or
    /// its contents are malformed; both leave any previously built graph in
    /// place.
    fn load_waypoints(&self) -> LayoutResult<Vec<Waypoint>>;
}

// ── InMemoryWaypointStore ─────────────────────────────────────────────────────

/// Fixed set of records held in memory.  Used for fixtures and embedded
/// sample layouts.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWaypointStore {
    waypoints: Vec<Waypoint>,
}

impl InMemoryWaypointStore {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
}

impl WaypointStore for InMemoryWaypointStore {
    fn load_waypoints(&self) -> LayoutResult<Vec<Waypoint>> {
        Ok(self.waypoints.clone())
    }
}

// ── File-backed stores ────────────────────────────────────────────────────────

/// JSON document file, re-read on every load so layout edits are picked up
/// by an explicit graph rebuild.
#[derive(Clone, Debug)]
pub struct JsonWaypointStore {
    path: PathBuf,
}

impl JsonWaypointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WaypointStore for JsonWaypointStore {
    fn load_waypoints(&self) -> LayoutResult<Vec<Waypoint>> {
        debug!(path = %self.path.display(), "loading JSON layout");
        load_waypoints_json(&self.path)
    }
}

/// CSV file with one row per waypoint, re-read on every load.
#[derive(Clone, Debug)]
pub struct CsvWaypointStore {
    path: PathBuf,
}

impl CsvWaypointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WaypointStore for CsvWaypointStore {
    fn load_waypoints(&self) -> LayoutResult<Vec<Waypoint>> {
        debug!(path = %self.path.display(), "loading CSV layout");
        load_waypoints_csv(&self.path)
    }
}

impl<S: WaypointStore + ?Sized> WaypointStore for Box<S> {
    fn load_waypoints(&self) -> LayoutResult<Vec<Waypoint>> {
        (**self).load_waypoints()
    }
}
