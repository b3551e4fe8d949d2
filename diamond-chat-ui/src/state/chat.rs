//! Chat State
//!
//! Reactive conversation state for the chat page, using Leptos signals.

use leptos::*;

use crate::api;
use crate::format::{generate_session_id, is_sendable};

/// Shown when the greeting cannot be fetched, so the thread is never empty
pub const FALLBACK_GREETING: &str = "Hello! Welcome to our diamond store. I'm here to help you find the perfect diamond. How can I assist you today?";

/// Appended as the bot's answer when a send fails
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

pub const GREETING_ERROR: &str =
    "Failed to connect to the chatbot. Please check if the backend is running.";

pub const SEND_ERROR: &str = "Failed to get response. Please try again.";

/// One entry in the thread
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content: String,
    pub timestamp: String,
    pub is_bot: bool,
}

impl Message {
    pub fn user(content: &str) -> Self {
        Self {
            content: content.to_string(),
            timestamp: now_iso8601(),
            is_bot: false,
        }
    }

    pub fn bot(content: &str) -> Self {
        Self {
            content: content.to_string(),
            timestamp: now_iso8601(),
            is_bot: true,
        }
    }

    pub fn from_reply(reply: api::ChatReply) -> Self {
        Self {
            content: reply.message,
            timestamp: reply.timestamp.unwrap_or_else(now_iso8601),
            is_bot: true,
        }
    }
}

fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Chat page state provided to the chat components
#[derive(Clone, Copy)]
pub struct ChatState {
    /// Correlation key for every backend call from this page
    pub session_id: StoredValue<String>,
    /// Thread, oldest first; only ever appended to
    pub messages: RwSignal<Vec<Message>>,
    /// A backend call is outstanding
    pub typing: RwSignal<bool>,
    /// Banner text
    pub error: RwSignal<Option<String>>,
}

/// Create chat state for this page and provide it to child components
pub fn provide_chat_state() -> ChatState {
    let state = ChatState {
        session_id: store_value(generate_session_id()),
        messages: create_rw_signal(Vec::new()),
        typing: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
    state
}

/// Clears the typing flag when the request future finishes, however it finishes
///
/// Uses `try_set` since the page may be gone by then.
struct TypingReset(RwSignal<bool>);

impl Drop for TypingReset {
    fn drop(&mut self) {
        let _ = self.0.try_set(false);
    }
}

impl ChatState {
    /// Replace the thread with the backend greeting (or the fallback)
    pub fn load_greeting(&self) {
        self.typing.set(true);

        let state = *self;
        spawn_local(async move {
            let _typing = TypingReset(state.typing);
            let session_id = state.session_id.get_value();

            match api::get_greeting(&session_id).await {
                Ok(reply) => {
                    let _ = state.messages.try_set(vec![Message::from_reply(reply)]);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading greeting: {}", e).into());
                    let _ = state.error.try_set(Some(GREETING_ERROR.to_string()));
                    let _ = state.messages.try_set(vec![Message::bot(FALLBACK_GREETING)]);
                }
            }
        });
    }

    /// Append the user's message and fetch the reply
    ///
    /// No-op for blank text or while a call is outstanding.
    pub fn send(&self, text: String) {
        if !is_sendable(&text) || self.typing.get_untracked() {
            return;
        }

        self.messages.update(|messages| messages.push(Message::user(&text)));
        self.typing.set(true);
        self.error.set(None);

        let state = *self;
        spawn_local(async move {
            let _typing = TypingReset(state.typing);
            let session_id = state.session_id.get_value();

            match api::send_message(&text, &session_id).await {
                Ok(reply) => {
                    let _ = state
                        .messages
                        .try_update(|messages| messages.push(Message::from_reply(reply)));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error sending message: {}", e).into());
                    let _ = state.error.try_set(Some(SEND_ERROR.to_string()));
                    let _ = state
                        .messages
                        .try_update(|messages| messages.push(Message::bot(APOLOGY_MESSAGE)));
                }
            }
        });
    }

    /// Hide the banner
    pub fn dismiss_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_names() {
        let message: Message = serde_json::from_str(
            r#"{"content": "Here are round diamonds...", "timestamp": "2024-01-01T00:00:00Z", "isBot": true}"#,
        )
        .unwrap();

        assert!(message.is_bot);
        assert_eq!(message.content, "Here are round diamonds...");
    }

    #[test]
    fn test_from_reply_keeps_timestamp() {
        let message = Message::from_reply(api::ChatReply {
            message: "Welcome!".to_string(),
            timestamp: Some("2024-01-01T00:00:00Z".to_string()),
        });

        assert!(message.is_bot);
        assert_eq!(message.timestamp, "2024-01-01T00:00:00Z");
    }
}
