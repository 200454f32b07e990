//! Shared HTTP response helpers for the API operations.
//!
//! Centralizes status classification (409 → conflict, 401 → auth, 400/404 →
//! precondition, anything else → server) and `detail` extraction so the
//! operation modules stay focused on request construction and response
//! mapping.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Fallback messages for one operation, used when the body carries no detail.
pub(crate) struct Messages {
    pub fallback: &'static str,
    pub by_status: &'static [(u16, &'static str)],
}

impl Messages {
    fn for_status(&self, status: u16) -> &'static str {
        self.by_status
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(self.fallback, |(_, message)| message)
    }
}

pub(crate) const NETWORK_MESSAGE: &str = "Cannot reach server. Is the API running?";

/// Send a prepared request, mapping transport failures to [`ApiError::Network`].
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    request.send().await.map_err(|source| {
        tracing::debug!(error = %source, "request failed before a response arrived");
        ApiError::Network {
            message: NETWORK_MESSAGE.to_string(),
            source,
        }
    })
}

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. On failure the body is read
/// once for a `detail` (or `message`) field.
pub(crate) async fn check_response(
    resp: reqwest::Response,
    messages: &Messages,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let code = status.as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = extract_detail(&body).unwrap_or_else(|| messages.for_status(code).to_string());
    tracing::debug!(status = code, %message, "API returned an error status");
    Err(classify(code, message))
}

/// Check the status, then decode the JSON body.
pub(crate) async fn json<T: DeserializeOwned>(
    resp: reqwest::Response,
    messages: &Messages,
) -> Result<T, ApiError> {
    let resp = check_response(resp, messages).await?;
    let bytes = resp.bytes().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) fn classify(status: u16, message: String) -> ApiError {
    match status {
        409 => ApiError::Conflict { message },
        401 => ApiError::Auth { message },
        400 | 404 => ApiError::Precondition { status, message },
        _ => ApiError::Server { status, message },
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"detail": "..."}`, validation lists `{"detail": [{"msg": ...}]}`,
/// and `{"message": "..."}`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.clone()),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string),
    }
}
