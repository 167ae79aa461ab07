//! Chat message entity
//!
//! Transient: messages live only as long as the chat widget that holds them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who sent the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Bot,
}

/// A single message in a chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub kind: MessageKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageKind::User, text)
    }

    /// Create a new bot message
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Bot, text)
    }

    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.kind == MessageKind::Bot
    }
}
