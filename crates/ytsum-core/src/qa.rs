//! Follow-up question types and the client-side conversation log.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QaRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaMessage {
    pub role: QaRole,
    pub content: String,
}

impl QaMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: QaRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: QaRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    pub transcript: String,
    pub question: String,
    pub history: Vec<QaMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Append-only log of a question-and-answer exchange about one transcript.
///
/// A question is only recorded together with its answer, so a failed call
/// leaves the log untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaConversation {
    messages: Vec<QaMessage>,
}

impl QaConversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a conversation from a stored history.
    #[must_use]
    pub fn from_history(messages: Vec<QaMessage>) -> Self {
        Self { messages }
    }

    #[must_use]
    pub fn messages(&self) -> &[QaMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Builds the request for the next question, carrying the full history.
    #[must_use]
    pub fn request(&self, transcript: &str, question: &str, video_id: Option<&str>) -> AskRequest {
        AskRequest {
            transcript: transcript.to_string(),
            question: question.to_string(),
            history: self.messages.clone(),
            video_id: video_id.map(str::to_string),
        }
    }

    /// Records a completed exchange.
    pub fn record(&mut self, question: &str, answer: &str) {
        self.messages.push(QaMessage::user(question));
        self.messages.push(QaMessage::assistant(answer));
    }
}
