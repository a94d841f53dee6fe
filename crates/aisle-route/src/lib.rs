//! `aisle-route` — shortest walk through every required stop.
//!
//! # Search model
//!
//! ```text
//! for each ordering [d1 .. dk] of the reorderable stops:
//!   walk  start → d1 → … → dk → checkout → end   (one BFS leg per arrow)
//!   drop the ordering if any leg is unreachable
//! keep the shortest composite walk; ties go to the earliest ordering
//! ```
//!
//! Legs depend only on their two endpoints, so each distinct leg is searched
//! once per composition and every ordering is scored from that table.
//!
//! # Crate layout
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`request`]      | `RouteRequest` (wire), `RoutePlan` (validated), `PlannedRoute` |
//! | [`permutations`] | `Permutations` — lazy lexicographic index orderings    |
//! | [`composer`]     | `RouteComposer`                                        |
//! | [`error`]        | `RouteError`, `RouteResult<T>`                         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Scores orderings on Rayon's thread pool.               |

pub mod composer;
pub mod error;
pub mod permutations;
pub mod request;


pub use composer::RouteComposer;
pub use error::{RouteError, RouteResult};
pub use permutations::Permutations;
pub use request::{PlannedRoute, RoutePlan, RouteRequest};
