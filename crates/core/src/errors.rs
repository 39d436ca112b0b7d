use thiserror::Error;

/// Error taxonomy for booking and catalog operations.
///
/// The `Validation`, `NotFound` and `Capacity` variants carry the exact
/// message surfaced to API callers, so their `Display` impls are the bare
/// message with no prefix.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Capacity(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type StudioResult<T> = Result<T, StudioError>;
