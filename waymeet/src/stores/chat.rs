//! Per-event group chat. Append-only, in call order.

use std::collections::HashMap;

use chrono::Utc;

use crate::id::generate_entity_id;
use crate::latency::{Latency, Operation};
use crate::mock;
use crate::types::ChatMessage;

/// `user_id` used for join/leave notices.
pub const SYSTEM_USER_ID: &str = "system";

pub struct ChatStore {
    messages: HashMap<String, Vec<ChatMessage>>,
    is_loading: bool,
    latency: Latency,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    pub fn new() -> Self {
        Self::with_latency(Latency::default())
    }

    /// Seeded with the sample conversation of event `"1"`.
    pub fn with_latency(latency: Latency) -> Self {
        Self {
            messages: HashMap::from([("1".to_string(), mock::messages())]),
            is_loading: false,
            latency,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn messages_for(&self, event_id: &str) -> &[ChatMessage] {
        self.messages.get(event_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a conversation has been opened for the event.
    pub fn has_thread(&self, event_id: &str) -> bool {
        self.messages.contains_key(event_id)
    }

    /// Make sure a thread exists for the event; existing messages are kept.
    pub async fn fetch_messages(&mut self, event_id: &str) {
        self.is_loading = true;
        self.latency.simulate(Operation::FetchMessages).await;
        self.messages.entry(event_id.to_string()).or_default();
        self.is_loading = false;
    }

    /// Unknown authors are shown as the first sample user.
    pub fn send_message(&mut self, event_id: &str, user_id: &str, text: &str) -> &ChatMessage {
        let message = ChatMessage {
            id: generate_entity_id(),
            event_id: event_id.to_string(),
            user_id: user_id.to_string(),
            user: mock::user_or_first(user_id),
            text: text.to_string(),
            timestamp: Utc::now(),
            is_system: false,
        };
        self.push(message)
    }

    pub fn add_system_message(&mut self, event_id: &str, text: &str) -> &ChatMessage {
        let message = ChatMessage {
            id: generate_entity_id(),
            event_id: event_id.to_string(),
            user_id: SYSTEM_USER_ID.to_string(),
            user: mock::first_user(),
            text: text.to_string(),
            timestamp: Utc::now(),
            is_system: true,
        };
        self.push(message)
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        log::debug!("chat {}: message {} from {}", message.event_id, message.id, message.user_id);
        let thread = self.messages.entry(message.event_id.clone()).or_default();
        thread.push(message);
        &thread[thread.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ChatStore {
        ChatStore::with_latency(Latency::none())
    }

    #[test]
    fn seeded_with_sample_thread() {
        let store = store();
        assert_eq!(store.messages_for("1").len(), mock::messages().len());
        assert!(store.messages_for("2").is_empty());
        assert!(!store.has_thread("2"));
    }

    #[tokio::test]
    async fn fetch_creates_empty_thread_and_keeps_existing() {
        let mut store = store();
        store.fetch_messages("2").await;
        assert!(store.has_thread("2"));
        assert!(store.messages_for("2").is_empty());

        store.fetch_messages("1").await;
        assert_eq!(store.messages_for("1").len(), mock::messages().len());
        assert!(!store.is_loading());
    }

    #[test]
    fn send_resolves_author() {
        let mut store = store();
        let known = store.send_message("3", "2", "Bora!").clone();
        assert_eq!(known.user.display_name, "Bruno Lima");
        assert!(!known.is_system);

        let unknown = store.send_message("3", "ghost", "oi").clone();
        assert_eq!(unknown.user_id, "ghost");
        assert_eq!(unknown.user.id, "1");
    }

    #[test]
    fn system_messages_are_flagged() {
        let mut store = store();
        let message = store.add_system_message("4", "Ana Souza entrou no grupo");
        assert!(message.is_system);
        assert_eq!(message.user_id, SYSTEM_USER_ID);
    }
}
