//! `aisle-graph` — the store's waypoint graph and point-to-point routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`graph`]  | `StoreGraph` (CSR adjacency by name), `StoreGraphBuilder`   |
//! | [`cache`]  | `GraphCache`: built once, shared as `Arc`, rebuilt on demand  |
//! | [`finder`] | `PathFinder` trait, `BreadthFirstFinder`                    |
//! | [`path`]   | `PathSegment`                                               |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for name → `NodeId` lookups.   |
//! | `serde`   | `Serialize`/`Deserialize` on `PathSegment`.              |

pub mod cache;
pub mod error;
pub mod finder;
pub mod graph;
pub mod path;

#[cfg(test)]
mod tests;

pub use cache::GraphCache;
pub use error::{GraphError, GraphResult};
pub use finder::{BreadthFirstFinder, PathFinder};
pub use graph::{StoreGraph, StoreGraphBuilder};
pub use path::PathSegment;
