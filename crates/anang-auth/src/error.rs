use anang_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in, run `anang auth login`")]
    NotAuthenticated,

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("session storage error: {0}")]
    Storage(String),
}
