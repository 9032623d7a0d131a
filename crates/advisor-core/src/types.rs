//! Core types — Role, Message, AdvisorState, StatusData.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Roles ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

// ── Messages ──

/// One entry in the conversation log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Local wall-clock time, already formatted for display
    pub timestamp: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}

// ── Conversation state ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorState {
    Idle,
    AwaitingReply,
}

impl AdvisorState {
    pub fn is_busy(self) -> bool {
        self == AdvisorState::AwaitingReply
    }
}

impl std::fmt::Display for AdvisorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisorState::Idle => write!(f, "idle"),
            AdvisorState::AwaitingReply => write!(f, "awaiting_reply"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusData {
    pub state: AdvisorState,
    pub message_count: usize,
}
