//! Fluent builder for constructing a [`RouteService`].

use aisle_core::RouteConfig;
use aisle_graph::{GraphCache, PathFinder, StoreGraph};
use aisle_layout::{DepartmentResolver, WaypointStore};
use aisle_route::RouteComposer;

use crate::{RouteService, ServiceResult};

/// Fluent builder for [`RouteService<S, F>`].
///
/// # Required inputs
///
/// - `S: WaypointStore` — where layout records come from
/// - `F: PathFinder` — the leg search (e.g. [`aisle_graph::BreadthFirstFinder`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                         |
/// |-----------------|-------------------------------------------------|
/// | `.config(c)`    | `RouteConfig::default()`                        |
/// | `.resolver(r)`  | none: item-list requests fail with status 500   |
/// | `.graph(g)`     | none: the store is read on the first request    |
pub struct RouteServiceBuilder<S: WaypointStore, F: PathFinder> {
    store:    S,
    finder:   F,
    config:   RouteConfig,
    resolver: Option<Box<dyn DepartmentResolver>>,
    graph:    Option<StoreGraph>,
}

impl<S: WaypointStore, F: PathFinder> RouteServiceBuilder<S, F> {
    pub fn new(store: S, finder: F) -> Self {
        Self {
            store,
            finder,
            config:   RouteConfig::default(),
            resolver: None,
            graph:    None,
        }
    }

    pub fn config(mut self, config: RouteConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable item-list requests.
    pub fn resolver(mut self, resolver: impl DepartmentResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Seed the graph cache so the first request does not touch the store.
    pub fn graph(mut self, graph: StoreGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Validate the configuration and return a ready service.
    pub fn build(self) -> ServiceResult<RouteService<S, F>> {
        self.config.validate()?;

        let cache = match self.graph {
            Some(graph) => GraphCache::with_graph(self.store, graph),
            None => GraphCache::new(self.store),
        };
        Ok(RouteService {
            composer: RouteComposer::from_config(self.finder, &self.config),
            config:   self.config,
            cache,
            resolver: self.resolver,
        })
    }
}
