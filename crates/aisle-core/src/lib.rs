//! `aisle-core` — foundational types for the `aisle` store-routing workspace.
//!
//! This crate is a dependency of every other `aisle-*` crate.  It has no
//! `aisle-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`ids`]        | `NodeId`, `EdgeId`                                    |
//! | [`waypoint`]   | `WaypointName`, `Direction`, `Directions`, `Waypoint` |
//! | [`config`]     | `RouteConfig`                                         |
//! | [`error`]      | `AisleError`, `AisleResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod waypoint;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MUST_VISIT_CEILING, RouteConfig};
pub use error::{AisleError, AisleResult};
pub use ids::{EdgeId, NodeId};
pub use waypoint::{Direction, Directions, Waypoint, WaypointName};
