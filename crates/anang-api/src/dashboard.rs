//! Dashboard data, roadmap progress and license upload.

use anang_core::entities::PartnerProfile;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::http::{self, Messages};
use crate::{ApiClient, ApiError, LicenseFile};

const DASHBOARD: Messages = Messages {
    fallback: "Failed to load dashboard data",
    by_status: &[],
};

const PROGRESS: Messages = Messages {
    fallback: "Failed to update progress",
    by_status: &[],
};

const UPLOAD: Messages = Messages {
    fallback: "Upload failed",
    by_status: &[],
};

/// Response of `PATCH /api/user/progress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    #[serde(default)]
    pub email: String,
    pub progress: u8,
    #[serde(default)]
    pub is_verified: bool,
}

/// Response of `POST /api/upload-license`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseReceipt {
    #[serde(default)]
    pub email: String,
    pub progress: u8,
    pub is_verified: bool,
    pub filename: String,
}

#[derive(Serialize)]
struct ProgressBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<u8>,
}

impl ApiClient {
    /// Joined auth and business record for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success status.
    pub async fn get_dashboard_data(&self, email: &str) -> Result<PartnerProfile, ApiError> {
        let url = self.url(&format!("/api/dashboard-data/{}", urlencoding::encode(email)));
        tracing::debug!(%url, "GET dashboard-data");
        let resp = http::send(self.http.get(&url)).await?;
        http::json(resp, &DASHBOARD).await
    }

    /// Record roadmap progress. With `Some(step)` the backend stores
    /// `max(current, step)`; with `None` it increments by one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any non-success status.
    pub async fn update_progress(
        &self,
        email: &str,
        step: Option<u8>,
    ) -> Result<ProgressUpdate, ApiError> {
        let url = format!(
            "{}?email={}",
            self.url("/api/user/progress"),
            urlencoding::encode(email)
        );
        tracing::debug!(%url, ?step, "PATCH progress");
        let resp = http::send(self.http.patch(&url).json(&ProgressBody { step })).await?;
        http::json(resp, &PROGRESS).await
    }

    /// Upload the final city license.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for a disallowed file type (nothing is sent);
    /// otherwise the backend's `detail` or "Upload failed".
    pub async fn upload_license(
        &self,
        email: &str,
        file: LicenseFile,
    ) -> Result<LicenseReceipt, ApiError> {
        file.ensure_allowed()?;
        let form = Form::new()
            .text("email", email.to_string())
            .part("file", file.into_part());
        let url = self.url("/api/upload-license");
        tracing::debug!(%url, "POST upload-license");
        let resp = http::send(self.http.post(&url).multipart(form)).await?;
        http::json(resp, &UPLOAD).await
    }
}
