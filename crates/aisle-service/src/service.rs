//! The request handler.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use aisle_core::RouteConfig;
use aisle_graph::{GraphCache, PathFinder, StoreGraph};
use aisle_layout::{DepartmentResolver, WaypointStore};
use aisle_route::{PlannedRoute, RouteComposer, RouteError, RouteRequest};

use crate::{ErrorBody, ServiceError, ServiceResult};

/// Shopping-list request: `{ "items": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemsRequest {
    pub items: Vec<String>,
}

/// Status plus body, ready to hand to whatever transport sits in front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    pub status: u16,
    pub body:   ResponseBody,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Route(PlannedRoute),
    Error(ErrorBody),
}

impl RouteResponse {
    fn from_result(result: ServiceResult<PlannedRoute>) -> Self {
        match result {
            Ok(route) => Self { status: 200, body: ResponseBody::Route(route) },
            Err(e) => {
                let status = e.status();
                if status >= 500 {
                    warn!(status, error = %e, "route request failed");
                } else {
                    debug!(status, error = %e, "route request rejected");
                }
                Self { status, body: ResponseBody::Error(e.body()) }
            }
        }
    }
}

/// Validates requests, serves the cached store graph, and composes routes.
///
/// Construct with [`RouteServiceBuilder`](crate::RouteServiceBuilder).  All
/// methods take `&self`; one service can be shared across request threads.
pub struct RouteService<S: WaypointStore, F: PathFinder> {
    pub(crate) config:   RouteConfig,
    pub(crate) cache:    GraphCache<S>,
    pub(crate) composer: RouteComposer<F>,
    pub(crate) resolver: Option<Box<dyn DepartmentResolver>>,
}

impl<S: WaypointStore, F: PathFinder> RouteService<S, F> {
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn cache(&self) -> &GraphCache<S> {
        &self.cache
    }

    /// Current store graph, building it on first use.
    pub fn graph(&self) -> ServiceResult<Arc<StoreGraph>> {
        Ok(self.cache.graph()?)
    }

    /// Plan a route for an explicit department list.
    ///
    /// The last department is the checkout; the rest are visited in whichever
    /// order gives the shortest walk.
    pub fn handle(&self, request: RouteRequest) -> ServiceResult<PlannedRoute> {
        let plan = request.into_plan()?;
        let graph = self.graph()?;
        Ok(self.composer.compose(&graph, &plan)?)
    }

    /// Plan a route for a shopping list, from the configured default start to
    /// the configured default end through the configured checkout.
    pub fn handle_items(&self, request: ItemsRequest) -> ServiceResult<PlannedRoute> {
        let items: Vec<String> = request
            .items
            .into_iter()
            .map(|i| i.trim().to_owned())
            .filter(|i| !i.is_empty())
            .collect();
        if items.is_empty() {
            return Err(RouteError::InputValidation("items must be a non-empty list".into()).into());
        }
        let resolver = self.resolver.as_deref().ok_or(ServiceError::NoResolver)?;

        let departments = resolver.resolve(&items, &self.config.checkout);
        info!(items = items.len(), departments = departments.len(), "matched departments");
        self.handle(RouteRequest::new(
            self.config.default_start.as_str(),
            self.config.default_end.as_str(),
            departments.iter().map(|d| d.as_str()),
        ))
    }

    /// [`handle`](Self::handle), with any failure turned into its wire form.
    pub fn respond(&self, request: RouteRequest) -> RouteResponse {
        RouteResponse::from_result(self.handle(request))
    }

    /// [`handle_items`](Self::handle_items), with any failure turned into its
    /// wire form.
    pub fn respond_items(&self, request: ItemsRequest) -> RouteResponse {
        RouteResponse::from_result(self.handle_items(request))
    }

    /// Reload the store and replace the cached graph.  On failure the
    /// previous graph keeps serving requests.
    pub fn refresh(&self) -> ServiceResult<Arc<StoreGraph>> {
        Ok(self.cache.rebuild()?)
    }
}
