//! API error types.
//!
//! Every variant's `Display` is the user-facing message: the backend's
//! `detail` when it sent one, otherwise the operation's fallback text.

use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected on the client before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// 409: duplicate email, application, or account.
    #[error("{message}")]
    Conflict { message: String },

    /// 401: invalid credentials.
    #[error("{message}")]
    Auth { message: String },

    /// 400/404: missing prerequisite or unknown resource.
    #[error("{message}")]
    Precondition { status: u16, message: String },

    /// No response was received.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any other non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response whose body could not be parsed.
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status behind the error, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Conflict { .. } => Some(409),
            Self::Auth { .. } => Some(401),
            Self::Precondition { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Validation(_) | Self::Network { .. } | Self::Decode(_) => None,
        }
    }

    /// Whether the request never reached the server.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
