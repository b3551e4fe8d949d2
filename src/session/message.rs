//! Chat messages

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ChatReply;

/// One entry in the conversation thread
///
/// Messages are immutable once created; the session only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    content: String,
    timestamp: String,
    is_bot: bool,
}

impl Message {
    /// A message typed by the user, stamped now
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: now_iso8601(),
            is_bot: false,
        }
    }

    /// A message from the assistant, stamped now
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: now_iso8601(),
            is_bot: true,
        }
    }

    /// A bot message built from a backend reply, stamped now when the reply has no timestamp
    pub fn from_reply(reply: ChatReply) -> Self {
        Self {
            content: reply.message,
            timestamp: reply.timestamp.unwrap_or_else(now_iso8601),
            is_bot: true,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// ISO-8601 creation time
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn is_bot(&self) -> bool {
        self.is_bot
    }
}

/// Current UTC time in the `2024-01-01T00:00:00.000Z` form
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reply_keeps_backend_timestamp() {
        let msg = Message::from_reply(ChatReply {
            message: "Here are round diamonds...".to_string(),
            timestamp: Some("2024-01-01T00:00:00Z".to_string()),
            session_id: None,
        });

        assert!(msg.is_bot());
        assert_eq!(msg.content(), "Here are round diamonds...");
        assert_eq!(msg.timestamp(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_from_reply_without_timestamp_uses_now() {
        let msg = Message::from_reply(ChatReply {
            message: "Hello".to_string(),
            timestamp: None,
            session_id: None,
        });

        assert!(chrono::DateTime::parse_from_rfc3339(msg.timestamp()).is_ok());
    }

    #[test]
    fn test_serialized_field_names() {
        let msg = Message::user("hi");
        let value = serde_json::to_value(&msg).unwrap();

        assert_eq!(value["content"], "hi");
        assert_eq!(value["isBot"], false);
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
