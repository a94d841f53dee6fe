//! Route request, validated plan, and planned route.

use serde::{Deserialize, Serialize};

use aisle_core::WaypointName;
use aisle_graph::PathSegment;

use crate::{RouteError, RouteResult};

// ── Wire types ────────────────────────────────────────────────────────────────

/// A routing request as received from a caller.
///
/// `departments` is ordered and its **last** entry is the checkout: it is
/// always visited last before `end` and never reordered.  Missing fields
/// deserialize as empty and are rejected by [`RouteRequest::into_plan`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRequest {
    pub start:       String,
    pub end:         String,
    pub departments: Vec<String>,
}

impl RouteRequest {
    pub fn new<I, S>(start: impl Into<String>, end: impl Into<String>, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            start:       start.into(),
            end:         end.into(),
            departments: departments.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate and split off the checkout.
    pub fn into_plan(self) -> RouteResult<RoutePlan> {
        let field = |value: &str, what: &str| {
            WaypointName::parse(value)
                .map_err(|_| RouteError::InputValidation(format!("missing {what}")))
        };
        let start = field(self.start.as_str(), "start")?;
        let end = field(self.end.as_str(), "end")?;

        let mut stops = self
            .departments
            .iter()
            .enumerate()
            .map(|(i, d)| field(d.as_str(), &format!("department name at position {i}")))
            .collect::<RouteResult<Vec<_>>>()?;
        let Some(checkout) = stops.pop() else {
            return Err(RouteError::InputValidation(
                "departments must list at least the checkout".into(),
            ));
        };
        Ok(RoutePlan { start, end, must_visit: stops, checkout })
    }
}

/// The successful response: stops in the order walked, and the full walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRoute {
    /// The chosen ordering of reorderable stops, then the checkout.
    pub departments: Vec<WaypointName>,
    /// Every waypoint from start to end inclusive.
    pub path: PathSegment,
}

// ── RoutePlan ─────────────────────────────────────────────────────────────────

/// A validated request: what the composer searches over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePlan {
    pub start:      WaypointName,
    pub end:        WaypointName,
    /// Stops that may be visited in any order.  Duplicates are kept and
    /// treated as separate stops.
    pub must_visit: Vec<WaypointName>,
    pub checkout:   WaypointName,
}

impl RoutePlan {
    pub fn new<I, N>(
        start:      impl Into<WaypointName>,
        end:        impl Into<WaypointName>,
        must_visit: I,
        checkout:   impl Into<WaypointName>,
    ) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<WaypointName>,
    {
        Self {
            start:      start.into(),
            end:        end.into(),
            must_visit: must_visit.into_iter().map(Into::into).collect(),
            checkout:   checkout.into(),
        }
    }

    /// Every waypoint the plan names, start and end included.
    pub fn waypoints(&self) -> impl Iterator<Item = &WaypointName> + '_ {
        std::iter::once(&self.start)
            .chain(self.must_visit.iter())
            .chain([&self.checkout, &self.end])
    }
}
