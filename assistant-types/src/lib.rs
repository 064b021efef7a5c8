//! Chat types shared between the sidebar UI and its host
//!
//! Used by:
//! - Dioxus components (WASM)
//! - whatever host supplies the chat history and callbacks
//!
//! Serializable with serde so a backend can ship them over JSON unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the chat history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub pending: bool, // True if optimistic (not confirmed by the host yet)
}

impl ChatMessage {
    /// Fresh message with a generated id and current timestamp.
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            pending: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
    System,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_wire_names_are_stable() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"User\"");
        assert_eq!(
            serde_json::to_string(&Sender::Assistant).unwrap(),
            "\"Assistant\""
        );
        assert_eq!(serde_json::to_string(&Sender::System).unwrap(), "\"System\"");
    }

    #[test]
    fn new_message_is_not_pending() {
        let msg = ChatMessage::new("hola", Sender::User);
        assert!(!msg.pending);
        assert_eq!(msg.text, "hola");
        assert_eq!(msg.sender, Sender::User);
        assert!(!msg.id.is_empty());
    }
}
