//! Admin review of pending partner accounts.

use anang_core::entities::AccountSummary;
use anang_core::enums::ApprovalStatus;
use serde::{Deserialize, Serialize};

use crate::http::{self, Messages};
use crate::{ApiClient, ApiError};

const PENDING: Messages = Messages {
    fallback: "Failed to load pending users",
    by_status: &[],
};

const APPROVE: Messages = Messages {
    fallback: "Approve failed",
    by_status: &[],
};

const REJECT: Messages = Messages {
    fallback: "Reject failed",
    by_status: &[],
};

/// Response of `GET /api/admin/pending`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUsers {
    #[serde(default)]
    pub users: Vec<AccountSummary>,
}

/// Outcome of an approve or reject action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDecision {
    pub email: String,
    pub status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

#[derive(Serialize)]
struct AdminAction<'a> {
    email: &'a str,
}

impl ApiClient {
    /// Accounts awaiting review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success status.
    pub async fn get_pending_users(&self) -> Result<PendingUsers, ApiError> {
        let url = self.url("/api/admin/pending");
        tracing::debug!(%url, "GET admin pending");
        let resp = http::send(self.http.get(&url)).await?;
        http::json(resp, &PENDING).await
    }

    /// Approve and verify an account.
    ///
    /// # Errors
    ///
    /// [`ApiError::Precondition`] when the user does not exist.
    pub async fn admin_approve(&self, email: &str) -> Result<AdminDecision, ApiError> {
        self.admin_action("/api/admin/approve", email, &APPROVE).await
    }

    /// Reject an account.
    ///
    /// # Errors
    ///
    /// [`ApiError::Precondition`] when the user does not exist.
    pub async fn admin_reject(&self, email: &str) -> Result<AdminDecision, ApiError> {
        self.admin_action("/api/admin/reject", email, &REJECT).await
    }

    async fn admin_action(
        &self,
        path: &str,
        email: &str,
        messages: &Messages,
    ) -> Result<AdminDecision, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST admin action");
        let body = AdminAction {
            email: email.trim(),
        };
        let resp = http::send(self.http.post(&url).json(&body)).await?;
        http::json(resp, messages).await
    }
}
