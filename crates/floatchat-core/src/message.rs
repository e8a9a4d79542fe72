use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "you",
            Self::Assistant => "assistant",
        }
    }
}

/// A single entry in the conversation transcript
///
/// Messages are immutable once created. The pending placeholder is the only
/// transient message; it is removed from the transcript when its reply
/// resolves rather than being edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub is_pending: bool,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), Sender::User, false)
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content.into(), Sender::Assistant, false)
    }

    /// Placeholder shown while a reply is in flight
    #[must_use]
    pub fn pending() -> Self {
        Self::new(String::new(), Sender::Assistant, true)
    }

    fn new(content: String, sender: Sender, is_pending: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender,
            timestamp: Utc::now(),
            is_pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let user = ChatMessage::user("show salinity");
        assert_eq!(user.sender, Sender::User);
        assert!(!user.is_pending);

        let pending = ChatMessage::pending();
        assert_eq!(pending.sender, Sender::Assistant);
        assert!(pending.is_pending);
        assert!(pending.content.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ChatMessage::pending().id, ChatMessage::pending().id);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json["sender"], "assistant");
        assert_eq!(json["is_pending"], false);
        assert_eq!(json["content"], "hi");
    }
}
