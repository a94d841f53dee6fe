//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`LayoutError`, `GraphError`,
//! `RouteError`, …) and wrap `AisleError` where a core check can fail.

use thiserror::Error;

/// Errors raised by `aisle-core` validation helpers.
#[derive(Debug, Error)]
pub enum AisleError {
    #[error("invalid waypoint: {0}")]
    InvalidWaypoint(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `aisle-core`.
pub type AisleResult<T> = Result<T, AisleError>;
