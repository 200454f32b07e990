use anang_api::ApiError;
use anang_auth::AuthError;
use anang_core::enums::ApprovalStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Form input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The control already has a request outstanding.
    #[error("a request is already in progress")]
    Busy,

    #[error("Complete steps 2-6 to unlock GO LIVE.")]
    Locked,

    /// Roadmap actions are only open to approved partners.
    #[error("roadmap actions require an approved account (status: {0})")]
    NotApproved(ApprovalStatus),
}
