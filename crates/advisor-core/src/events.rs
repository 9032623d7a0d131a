//! ConversationEvent enum — broadcast from the store to frontends via tokio::broadcast.

use serde::{Deserialize, Serialize};

use crate::types::{Message, StatusData};

/// Events broadcast from a ConversationStore to all subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ConversationEvent {
    /// A message was appended to the log (user or assistant)
    #[serde(rename = "message")]
    Message(Message),

    /// Idle / awaiting-reply transition
    #[serde(rename = "status")]
    Status(StatusData),
}

impl ConversationEvent {
    /// Serialize to the envelope frontends expect:
    /// `{"event": "...", "data": {...}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
