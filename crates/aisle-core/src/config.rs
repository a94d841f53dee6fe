//! Route-planning configuration.

use std::time::Duration;

use crate::{AisleError, AisleResult, WaypointName};

/// Hard ceiling on [`RouteConfig::max_must_visit`].  10! orderings is already
/// several million BFS chains; beyond that no budget makes sense.
pub const MUST_VISIT_CEILING: usize = 10;

/// Knobs for route planning.  All fields are `pub`; start from
/// [`RouteConfig::default`] and override what differs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Waypoint every route passes through last before the exit.
    pub checkout: WaypointName,

    /// Start used when a request is built from an item list.
    pub default_start: WaypointName,

    /// Exit used when a request is built from an item list.
    pub default_end: WaypointName,

    /// Largest accepted number of reorderable stops.  Search cost grows as
    /// `max_must_visit!`.
    pub max_must_visit: usize,

    /// Wall-clock budget for one permutation search.  `None` = unbounded.
    pub time_budget: Option<Duration>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            checkout:       WaypointName::new("Checkouts"),
            default_start:  WaypointName::new("Entrance"),
            default_end:    WaypointName::new("Exit"),
            max_must_visit: 8,
            time_budget:    None,
        }
    }
}

impl RouteConfig {
    pub fn validate(&self) -> AisleResult<()> {
        for (field, name) in [
            ("checkout", &self.checkout),
            ("default_start", &self.default_start),
            ("default_end", &self.default_end),
        ] {
            if name.trim().is_empty() {
                return Err(AisleError::Config(format!("{field} must not be empty")));
            }
        }
        if self.max_must_visit > MUST_VISIT_CEILING {
            return Err(AisleError::Config(format!(
                "max_must_visit {} exceeds the ceiling of {MUST_VISIT_CEILING}",
                self.max_must_visit
            )));
        }
        if self.time_budget == Some(Duration::ZERO) {
            return Err(AisleError::Config("time_budget must be non-zero".into()));
        }
        Ok(())
    }
}
