//! The conversation store — append-only message log plus the busy gate.
//!
//! A submission appends the user message immediately, picks the reply right
//! away, and hands it to a spawned task that appends it after the configured
//! delay. While that task is outstanding every other submission is dropped.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::events::ConversationEvent;
use crate::replies;
use crate::types::*;

/// Why a submission was ignored. Logged, never returned to callers.
#[derive(Debug, Error, PartialEq, Eq)]
enum Rejection {
    #[error("message is empty")]
    Empty,
    #[error("a reply is already in flight")]
    Busy,
}

#[derive(Debug)]
struct ConversationState {
    messages: Vec<Message>,
    state: AdvisorState,
}

impl ConversationState {
    /// Returns the trimmed text to record if the submission may proceed.
    fn admit<'a>(&self, text: &'a str) -> Result<&'a str, Rejection> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Rejection::Empty);
        }
        if self.state.is_busy() {
            return Err(Rejection::Busy);
        }
        Ok(trimmed)
    }

    fn status(&self) -> StatusData {
        StatusData {
            state: self.state,
            message_count: self.messages.len(),
        }
    }
}

/// Handle to an in-flight assistant reply. There is no way to abort it;
/// dropping the handle leaves the reply to land on its own.
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// Wait until the assistant message has been appended.
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            warn!("Reply task failed: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Holds the conversation and serializes every mutation behind one lock.
pub struct ConversationStore {
    state: Arc<RwLock<ConversationState>>,
    event_tx: broadcast::Sender<ConversationEvent>,
    config: Config,
}

impl ConversationStore {
    /// New conversation, Idle, with the welcome message already in place.
    pub fn new(config: Config) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        let welcome = Message::new(
            Role::Assistant,
            config.welcome_message.clone(),
            local_timestamp(&config.timestamp_format),
        );

        Self {
            state: Arc::new(RwLock::new(ConversationState {
                messages: vec![welcome],
                state: AdvisorState::Idle,
            })),
            event_tx,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.event_tx.subscribe()
    }

    /// Snapshot of the log in display order.
    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    pub async fn state(&self) -> AdvisorState {
        self.state.read().await.state
    }

    pub async fn is_busy(&self) -> bool {
        self.state().await.is_busy()
    }

    /// Submit user text. Returns `None` when the text is blank or a reply is
    /// still pending; the conversation is left untouched in that case.
    pub async fn submit(&self, text: &str) -> Option<PendingReply> {
        let mut state = self.state.write().await;

        let content = match state.admit(text) {
            Ok(content) => content,
            Err(reason) => {
                debug!("Ignoring submission: {}", reason);
                return None;
            }
        };

        let reply = replies::select_reply(content);
        info!("Accepted submission (topic: {:?})", replies::topic_for(content));

        let user_msg = Message::new(
            Role::User,
            content,
            local_timestamp(&self.config.timestamp_format),
        );
        state.messages.push(user_msg.clone());
        state.state = AdvisorState::AwaitingReply;
        let _ = self.event_tx.send(ConversationEvent::Message(user_msg));
        let _ = self.event_tx.send(ConversationEvent::Status(state.status()));

        let shared = self.state.clone();
        let event_tx = self.event_tx.clone();
        let delay = self.config.reply_delay();
        let format = self.config.timestamp_format.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = shared.write().await;
            let reply_msg = Message::new(Role::Assistant, reply, local_timestamp(&format));
            state.messages.push(reply_msg.clone());
            state.state = AdvisorState::Idle;
            let _ = event_tx.send(ConversationEvent::Message(reply_msg));

            let status = ConversationEvent::Status(state.status());
            info!("Reply delivered: {}", status.to_json());
            let _ = event_tx.send(status);
        });

        Some(PendingReply { handle })
    }
}

/// Current local time rendered with `format`, falling back to HH:MM if the
/// format string contains an unknown specifier.
fn local_timestamp(format: &str) -> String {
    use std::fmt::Write;

    let now = chrono::Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        return now.format("%H:%M").to_string();
    }
    out
}
