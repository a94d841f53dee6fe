use aisle_core::AisleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout parse error: {0}")]
    Parse(String),

    #[error("invalid layout record: {0}")]
    Invalid(#[from] AisleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
