//! # anang-api
//!
//! HTTP client for the Anang partner backend.
//!
//! One method per endpoint, one request per call, no retries. Failures come
//! back as [`ApiError`] whose `Display` is the message to show the user:
//! - accounts: signup, login, finalize, user lookup
//! - partner applications and the legacy one-shot registration
//! - dashboard data, roadmap progress and license upload
//! - discovery categories and entries
//! - verified businesses, with a bundled fallback listing
//! - chat, admin review, health

pub mod admin;
pub mod application;
pub mod auth;
pub mod businesses;
pub mod chat;
pub mod dashboard;
pub mod discovery;
pub mod fallback;
#[cfg(feature = "mock")]
pub mod mock;

mod error;
mod http;
mod upload;

pub use admin::{AdminDecision, PendingUsers};
pub use application::{ApplicationForm, ApplicationReceipt, PartnerRegistration};
pub use auth::{Credentials, LoginResponse};
pub use chat::ChatAnswer;
pub use dashboard::{LicenseReceipt, ProgressUpdate};
pub use error::ApiError;
pub use upload::{ALLOWED_LICENSE_EXTENSIONS, LicenseFile};

use anang_config::ApiConfig;
use serde::{Deserialize, Serialize};

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

const HEALTH: http::Messages = http::Messages {
    fallback: "Health check failed",
    by_status: &[],
};

/// HTTP client for the partner backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with the default user agent.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::build(base_url.into(), &ApiConfig::default().user_agent)
    }

    /// Create a client from the `[api]` config section.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::build(config.base().to_string(), &config.user_agent)
    }

    fn build(base_url: String, user_agent: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Check that the backend is up.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<Health, ApiError> {
        let url = self.url("/health");
        tracing::debug!(%url, "GET health");
        let resp = http::send(self.http.get(&url)).await?;
        http::json(resp, &HEALTH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn from_config_uses_base_url() {
        let config = ApiConfig {
            base_url: "https://partners.example".into(),
            ..ApiConfig::default()
        };
        assert_eq!(ApiClient::from_config(&config).base_url(), "https://partners.example");
    }
}
