//! advisor-core — Pure conversation logic, no UI.
//!
//! Holds the canned-reply selector and the conversation store that stamps,
//! appends and delays messages. Frontends read snapshots from the store and
//! subscribe to changes via tokio::broadcast.

pub mod config;
pub mod events;
pub mod replies;
pub mod store;
pub mod types;

pub use replies::select_reply;
pub use store::{ConversationStore, PendingReply};
