//! `aisle-service` — the request boundary of the aisle workspace.
//!
//! # Request flow
//!
//! ```text
//! RouteRequest ──validate──▶ RoutePlan
//!                               │
//!            GraphCache::graph()│  (built once, shared snapshot)
//!                               ▼
//!                   RouteComposer::compose ──▶ PlannedRoute
//! ```
//!
//! Item lists take a detour first: a [`DepartmentResolver`] turns items into
//! departments, the checkout is appended, and the configured default start
//! and end fill in the rest.
//!
//! Every failure becomes a [`ServiceError`] with an HTTP-style status and a
//! serialisable [`ErrorBody`]; see [`RouteService::respond`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aisle_graph::BreadthFirstFinder;
//! use aisle_layout::JsonWaypointStore;
//! use aisle_route::RouteRequest;
//! use aisle_service::RouteServiceBuilder;
//!
//! let service = RouteServiceBuilder::new(JsonWaypointStore::new("store.json"), BreadthFirstFinder)
//!     .build()?;
//! let route = service.handle(RouteRequest::new("Entrance", "Exit", ["Dairy", "Checkouts"]))?;
//! ```
//!
//! [`DepartmentResolver`]: aisle_layout::DepartmentResolver

pub mod builder;
pub mod error;
pub mod service;


pub use builder::RouteServiceBuilder;
pub use error::{ErrorBody, ServiceError, ServiceResult};
pub use service::{ItemsRequest, ResponseBody, RouteResponse, RouteService};
