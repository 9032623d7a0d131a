//! App state, input handling, event application.

use std::sync::Arc;

use advisor_core::events::ConversationEvent;
use advisor_core::store::ConversationStore;
use advisor_core::types::*;

/// The main application state. Mirrors the store through its events.
pub struct App {
    pub store: Arc<ConversationStore>,
    pub advisor_name: String,
    pub messages: Vec<Message>,
    pub state: AdvisorState,
    pub input: String,
    pub scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    pub async fn new(store: Arc<ConversationStore>) -> Self {
        let messages = store.messages().await;
        let state = store.state().await;
        let advisor_name = store.config().advisor_name.clone();

        App {
            store,
            advisor_name,
            messages,
            state,
            input: String::new(),
            scroll_offset: 0,
            should_quit: false,
        }
    }

    /// Apply a store event to the local mirror.
    pub fn handle_event(&mut self, event: ConversationEvent) {
        match event {
            ConversationEvent::Message(msg) => {
                self.messages.push(msg);
                // Auto-scroll to bottom
                self.scroll_offset = 0;
            }
            ConversationEvent::Status(status) => {
                self.state = status.state;
            }
        }
    }

    /// Re-read everything after falling behind on the event channel.
    pub async fn resync(&mut self) {
        self.messages = self.store.messages().await;
        self.state = self.store.state().await;
    }

    /// Submit the composer contents. The text is kept if the store ignores it
    /// (a reply is still on its way), so it can be sent again afterwards.
    pub async fn send_message(&mut self) {
        if self.input.trim().is_empty() {
            self.input.clear();
            return;
        }
        if self.store.submit(&self.input).await.is_some() {
            self.input.clear();
        }
    }

    /// Scroll towards older messages; the oldest one always stays visible.
    pub fn scroll_up(&mut self) {
        let max = self.messages.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(3).min(max);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}
