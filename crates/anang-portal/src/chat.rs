//! Chat panel: the in-memory transcript with the Kingston assistant.

use anang_api::ApiClient;
use anang_chat::{Block, Inline, format_message};
use anang_core::entities::ChatMessage;
use anang_core::enums::Role;
use chrono::Utc;

use crate::error::PortalError;
use crate::tasks::InFlight;

/// Shown while the transcript is empty.
pub const EMPTY_HINT: &str =
    "Ask for a 3-day trip, local restaurants, or things to do. I'll use Kingston data to help.";

const ERROR_PREFIX: &str = "Sorry, I couldn't process that.";

#[derive(Debug)]
pub struct ChatPanel {
    api: ApiClient,
    transcript: Vec<ChatMessage>,
    next_id: u64,
    thinking: InFlight,
    error: Option<String>,
}

impl ChatPanel {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            transcript: Vec::new(),
            next_id: 1,
            thinking: InFlight::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.transcript
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.thinking.is_busy()
    }

    /// Busy flag shared with whatever draws the typing indicator.
    #[must_use]
    pub fn thinking(&self) -> InFlight {
        self.thinking.clone()
    }

    /// Message of the last failed question.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        (self.transcript.is_empty() && !self.is_thinking()).then_some(EMPTY_HINT)
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
        self.error = None;
    }

    /// Ask a question and append the reply.
    ///
    /// Blank input is ignored (`Ok(None)`). A failed request still appends
    /// an assistant apology carrying the error message.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Busy`] while a previous question is pending;
    /// the transcript is untouched.
    pub async fn send(&mut self, input: &str) -> Result<Option<&ChatMessage>, PortalError> {
        let question = input.trim();
        if question.is_empty() {
            return Ok(None);
        }
        let busy = self.thinking.start()?;
        self.push(Role::User, question.to_string());
        self.error = None;

        let reply = match self.api.chat_ask(question).await {
            Ok(answer) => answer.answer,
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                let message = e.to_string();
                let reply = format!("{ERROR_PREFIX} {message}");
                self.error = Some(message);
                reply
            }
        };
        drop(busy);
        self.push(Role::Assistant, reply);
        Ok(self.transcript.last())
    }

    fn push(&mut self, role: Role, content: String) {
        self.transcript.push(ChatMessage {
            id: self.next_id,
            role,
            content,
            created_at: Utc::now(),
        });
        self.next_id += 1;
    }
}

/// Display blocks for a message. Assistant replies are formatted; user
/// messages are shown verbatim.
#[must_use]
pub fn render_message(message: &ChatMessage) -> Vec<Block> {
    match message.role {
        Role::Assistant => format_message(&message.content),
        Role::User => vec![Block::Text {
            inlines: vec![Inline::Plain(message.content.clone())],
        }],
    }
}
