//! Kingston assistant chat.

use serde::{Deserialize, Serialize};

use crate::http::{self, Messages};
use crate::{ApiClient, ApiError};

const ASK: Messages = Messages {
    fallback: "Failed to get a response",
    by_status: &[(400, "Question cannot be empty")],
};

/// Response of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
}

impl ApiClient {
    /// Ask the assistant a question.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for a blank question (nothing is sent);
    /// otherwise the backend's `detail`.
    pub async fn chat_ask(&self, question: &str) -> Result<ChatAnswer, ApiError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ApiError::Validation("Question cannot be empty".into()));
        }
        let url = self.url("/api/chat");
        tracing::debug!(%url, "POST chat");
        let resp = http::send(self.http.post(&url).json(&ChatRequest { question })).await?;
        http::json(resp, &ASK).await
    }
}
