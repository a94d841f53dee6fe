//! Graph-subsystem error type.

use thiserror::Error;

use aisle_core::WaypointName;
use aisle_layout::LayoutError;

/// Errors produced by `aisle-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No walk exists between the two waypoints, or one of them is not in
    /// the graph.  An ordinary outcome for a single leg.
    #[error("no path from {from} to {to}")]
    Unreachable { from: WaypointName, to: WaypointName },

    /// The waypoint store could not be read while building the graph.
    #[error("waypoint data unavailable: {0}")]
    DataUnavailable(#[from] LayoutError),
}

pub type GraphResult<T> = Result<T, GraphError>;
