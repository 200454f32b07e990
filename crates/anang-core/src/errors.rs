//! Cross-cutting error types for the portal client.
//!
//! Domain-specific errors (`ApiError`, `AuthError`, `PortalError`) are defined
//! in their respective crates. The CLI converges them into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Anang crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value did not match any known variant.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// A roadmap step id outside `1..=7`.
    #[error("No roadmap step with id {0}")]
    UnknownStep(u8),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
