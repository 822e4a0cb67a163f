use thiserror::Error;

/// Error taxonomy shared by every domain service. Each request fails
/// independently; none of these is fatal to the process and none is
/// retried automatically.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("upstream service failure: {0}")]
    UpstreamFailure(String),

    #[error("unparseable upstream payload: {0}")]
    ParseFailure(String),

    #[error("internal error: {0}")]
    Internal(String),
}
