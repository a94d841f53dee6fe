use std::time::Duration;

use thiserror::Error;

use aisle_core::WaypointName;

#[derive(Debug, Error)]
pub enum RouteError {
    /// Missing or malformed request fields.
    #[error("invalid route request: {0}")]
    InputValidation(String),

    /// More reorderable stops than the permutation search accepts.
    #[error("too many departments to order: {got} given, at most {max} accepted")]
    InputTooLarge { got: usize, max: usize },

    /// No ordering of the stops admits a complete walk.
    #[error("no valid route from {start} to {end} through all departments")]
    NoValidRoute { start: WaypointName, end: WaypointName },

    /// The permutation search ran past its wall-clock budget.
    #[error("route search exceeded its {budget:?} budget")]
    BudgetExceeded { budget: Duration },
}

pub type RouteResult<T> = Result<T, RouteError>;
