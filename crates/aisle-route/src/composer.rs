//! Multi-stop route composition.
//!
//! # Cost
//!
//! `k` reorderable stops give `k!` orderings.  Each ordering is scored by
//! table lookups, but the table itself needs up to `(k + 1)²` BFS runs, and
//! `8! = 40 320` orderings is already noticeable per request.  Plans with more
//! than `max_must_visit` stops are refused up front, and an optional
//! wall-clock budget aborts a search that runs long.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use aisle_core::{RouteConfig, WaypointName};
use aisle_graph::{PathFinder, PathSegment, StoreGraph};

use crate::{Permutations, PlannedRoute, RouteError, RoutePlan, RouteResult};

/// How often (in orderings) the sequential search checks its deadline.
#[cfg(not(feature = "parallel"))]
const DEADLINE_CHECK_INTERVAL: usize = 64;

/// `(node_count, ordering_index, ordering)` of a complete walk.
type Candidate = (usize, usize, Vec<usize>);

// ── RouteComposer ─────────────────────────────────────────────────────────────

/// Finds the shortest walk `start → (every stop, any order) → checkout → end`.
///
/// # Type parameter
///
/// `F` is the point-to-point search used for every leg (normally
/// [`aisle_graph::BreadthFirstFinder`]).
pub struct RouteComposer<F: PathFinder> {
    finder:         F,
    max_must_visit: usize,
    time_budget:    Option<Duration>,
}

impl<F: PathFinder> RouteComposer<F> {
    /// Composer with [`RouteConfig::default`] limits.
    pub fn new(finder: F) -> Self {
        Self::from_config(finder, &RouteConfig::default())
    }

    pub fn from_config(finder: F, config: &RouteConfig) -> Self {
        Self {
            finder,
            max_must_visit: config.max_must_visit,
            time_budget:    config.time_budget,
        }
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    pub fn max_must_visit(&self) -> usize {
        self.max_must_visit
    }

    /// Search every ordering of `plan.must_visit` and return the shortest
    /// complete walk.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InputTooLarge`] before any search if there are more
    ///   than `max_must_visit` reorderable stops.
    /// - [`RouteError::NoValidRoute`] if no ordering gives a complete walk.
    /// - [`RouteError::BudgetExceeded`] if the time budget runs out.
    pub fn compose(&self, graph: &StoreGraph, plan: &RoutePlan) -> RouteResult<PlannedRoute> {
        let k = plan.must_visit.len();
        if k > self.max_must_visit {
            return Err(RouteError::InputTooLarge { got: k, max: self.max_must_visit });
        }
        for name in plan.waypoints() {
            if !graph.contains(name) {
                warn!(waypoint = %name, "requested waypoint not in store graph");
            }
        }

        let no_route = || RouteError::NoValidRoute {
            start: plan.start.clone(),
            end:   plan.end.clone(),
        };

        // Every ordering ends with this leg; without it nothing can succeed.
        let Some(exit_leg) = self.leg(graph, &plan.checkout, &plan.end) else {
            info!(checkout = %plan.checkout, end = %plan.end, "exit unreachable from checkout");
            return Err(no_route());
        };

        let deadline = self.time_budget.map(|b| Instant::now() + b);
        let table = LegTable::build(self, graph, plan);

        let Some((nodes, index, order)) = self.search(&table, &exit_leg, k, deadline)? else {
            info!(start = %plan.start, end = %plan.end, stops = k, "no ordering admits a complete walk");
            return Err(no_route());
        };

        let path = table.stitch(&order, &exit_leg);
        debug_assert_eq!(path.len(), nodes);
        let mut departments: Vec<_> = order.iter().map(|&i| plan.must_visit[i].clone()).collect();
        departments.push(plan.checkout.clone());

        info!(
            start = %plan.start,
            end = %plan.end,
            stops = k,
            ordering = index,
            length = nodes,
            "route composed"
        );
        Ok(PlannedRoute { departments, path })
    }

    fn leg(&self, graph: &StoreGraph, from: &str, to: &str) -> Option<PathSegment> {
        match self.finder.find_path(graph, from, to) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "leg unreachable");
                None
            }
        }
    }

    /// Best `(node_count, ordering_index, ordering)`, earliest ordering on ties.
    #[cfg(not(feature = "parallel"))]
    fn search(
        &self,
        table:    &LegTable,
        exit_leg: &PathSegment,
        k:        usize,
        deadline: Option<Instant>,
    ) -> RouteResult<Option<Candidate>> {
        let mut best: Option<Candidate> = None;

        for (index, order) in Permutations::new(k).enumerate() {
            if index % DEADLINE_CHECK_INTERVAL == 0 {
                self.check_deadline(deadline)?;
            }
            let Some(nodes) = table.score(&order, exit_leg) else {
                continue;
            };
            if best.as_ref().is_none_or(|(b, _, _)| nodes < *b) {
                best = Some((nodes, index, order));
            }
        }
        Ok(best)
    }

    /// Best `(node_count, ordering_index, ordering)`, earliest ordering on ties.
    #[cfg(feature = "parallel")]
    fn search(
        &self,
        table:    &LegTable,
        exit_leg: &PathSegment,
        k:        usize,
        deadline: Option<Instant>,
    ) -> RouteResult<Option<Candidate>> {
        use rayon::prelude::*;

        // par_bridge does not preserve order; the enumeration index carried
        // with each candidate restores the sequential tie-break.
        Permutations::new(k)
            .enumerate()
            .par_bridge()
            .map(|(index, order)| -> RouteResult<Option<Candidate>> {
                self.check_deadline(deadline)?;
                Ok(table.score(&order, exit_leg).map(|nodes| (nodes, index, order)))
            })
            .try_reduce(|| None, |a, b| Ok(earliest_shortest(a, b)))
    }

    fn check_deadline(&self, deadline: Option<Instant>) -> RouteResult<()> {
        match (deadline, self.time_budget) {
            (Some(d), Some(budget)) if Instant::now() >= d => {
                warn!(?budget, "route search budget exceeded");
                Err(RouteError::BudgetExceeded { budget })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "parallel")]
fn earliest_shortest(a: Option<Candidate>, b: Option<Candidate>) -> Option<Candidate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if (b.0, b.1) < (a.0, a.1) { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

// ── LegTable ──────────────────────────────────────────────────────────────────

/// Every leg an ordering can use, searched once.
///
/// Stop slots: `0` = start, `1..=k` = reorderable stops, `k + 1` = checkout.
/// `legs[from * width + to]` is the walk between two slots, `None` when
/// unreachable.  Legs into the start slot or out of the checkout slot never
/// occur in an ordering and are not searched.
struct LegTable {
    start: WaypointName,
    width: usize,
    legs:  Vec<Option<PathSegment>>,
}

impl LegTable {
    fn build<F: PathFinder>(composer: &RouteComposer<F>, graph: &StoreGraph, plan: &RoutePlan) -> Self {
        let k = plan.must_visit.len();
        let width = k + 2;

        let mut legs = vec![None; width * width];
        for from in 0..=k {
            for to in 1..width {
                if from != to {
                    legs[from * width + to] =
                        composer.leg(graph, slot_name(plan, from), slot_name(plan, to));
                }
            }
        }
        Self { start: plan.start.clone(), width, legs }
    }

    fn get(&self, from: usize, to: usize) -> Option<&PathSegment> {
        self.legs[from * self.width + to].as_ref()
    }

    /// Slot sequence walked by `order` (indices into the reorderable stops),
    /// excluding the final checkout → end leg.
    fn slots<'a>(&self, order: &'a [usize]) -> impl Iterator<Item = (usize, usize)> + 'a {
        let checkout = self.width - 1;
        let stops = order.iter().map(|&i| i + 1).chain(std::iter::once(checkout));
        std::iter::once(0)
            .chain(order.iter().map(|&i| i + 1))
            .zip(stops)
    }

    /// Node count of the composite walk, or `None` if a leg is unreachable.
    fn score(&self, order: &[usize], exit_leg: &PathSegment) -> Option<usize> {
        let mut edges = exit_leg.edge_count();
        for (from, to) in self.slots(order) {
            let Some(leg) = self.get(from, to) else {
                trace!(?order, from, to, "ordering has an unreachable leg");
                return None;
            };
            edges += leg.edge_count();
        }
        Some(edges + 1)
    }

    /// Concatenate the legs of an ordering `score` accepted (so every leg is
    /// present).
    fn stitch(&self, order: &[usize], exit_leg: &PathSegment) -> PathSegment {
        let mut path = PathSegment::single(self.start.clone());
        for leg in self.slots(order).filter_map(|(from, to)| self.get(from, to)) {
            path.extend_leg(leg);
        }
        path.extend_leg(exit_leg);
        path
    }
}

fn slot_name(plan: &RoutePlan, slot: usize) -> &str {
    match slot {
        0 => plan.start.as_str(),
        i if i <= plan.must_visit.len() => plan.must_visit[i - 1].as_str(),
        _ => plan.checkout.as_str(),
    }
}
