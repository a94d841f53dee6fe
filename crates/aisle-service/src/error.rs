use serde::{Deserialize, Serialize};
use thiserror::Error;

use aisle_core::AisleError;
use aisle_graph::GraphError;
use aisle_route::RouteError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("service configuration error: {0}")]
    Config(#[from] AisleError),

    /// An item list arrived but no resolver was configured.
    #[error("no department resolver configured")]
    NoResolver,
}

impl ServiceError {
    /// HTTP-style status for this failure.
    ///
    /// | Status | Cause                                               |
    /// |--------|-----------------------------------------------------|
    /// | 400    | malformed request, too many departments             |
    /// | 404    | no ordering admits a complete walk                  |
    /// | 500    | store unreadable, bad configuration, search timeout |
    pub fn status(&self) -> u16 {
        match self {
            Self::Route(RouteError::InputValidation(_) | RouteError::InputTooLarge { .. }) => 400,
            Self::Route(RouteError::NoValidRoute { .. })
            | Self::Graph(GraphError::Unreachable { .. }) => 404,
            Self::Route(RouteError::BudgetExceeded { .. })
            | Self::Graph(GraphError::DataUnavailable(_))
            | Self::Config(_)
            | Self::NoResolver => 500,
        }
    }

    /// Wire form: a short summary plus this error's message as details.
    pub fn body(&self) -> ErrorBody {
        let error = match self.status() {
            400 => "Invalid route request.",
            404 => "No valid path found through all departments.",
            _ => "Internal server error.",
        };
        ErrorBody { error: error.to_owned(), details: Some(self.to_string()) }
    }
}

/// `{ "error": ..., "details"?: ... }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
