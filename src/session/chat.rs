//! Chat Session
//!
//! Owns the conversation for one session: the ordered message list, the
//! typing flag and the error banner.
//!
//! ## Flow
//!
//! 1. [`ChatSession::load_greeting`] replaces the empty thread with one bot
//!    message (the backend greeting, or a fixed fallback on failure)
//! 2. [`ChatSession::send`] appends the user message right away, then the
//!    bot reply (or a fixed apology on failure)
//!
//! Both hold the typing flag for the duration of the backend call. The flag
//! is released when the call finishes, fails, or is abandoned, and a send
//! arriving while it is held is ignored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::id::SessionId;
use super::message::Message;
use crate::client::ChatApi;
use crate::input::is_sendable;

/// Shown when the greeting cannot be fetched, so the thread is never empty
pub const FALLBACK_GREETING: &str = "Hello! Welcome to our diamond store. I'm here to help you find the perfect diamond. How can I assist you today?";

/// Appended as the bot's answer when a send fails
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Banner text after a failed greeting
pub const GREETING_ERROR: &str =
    "Failed to connect to the chatbot. Please check if the backend is running.";

/// Banner text after a failed send
pub const SEND_ERROR: &str = "Failed to get response. Please try again.";

/// What happened to a call to [`ChatSession::send`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The backend answered and its reply was appended
    Replied,
    /// The call failed and the apology was appended
    Failed,
    /// Nothing was sent: blank text, or another call was outstanding
    Ignored,
}

#[derive(Debug, Default)]
struct Transcript {
    messages: Vec<Message>,
    error: Option<String>,
}

/// Chat state for one session
pub struct ChatSession<A: ?Sized> {
    api: Arc<A>,
    session_id: SessionId,
    typing: AtomicBool,
    transcript: RwLock<Transcript>,
}

impl<A: ChatApi + ?Sized> ChatSession<A> {
    /// Create a session with a freshly generated id
    pub fn new(api: Arc<A>) -> Self {
        Self::with_id(api, SessionId::generate())
    }

    pub fn with_id(api: Arc<A>, session_id: SessionId) -> Self {
        Self {
            api,
            session_id,
            typing: AtomicBool::new(false),
            transcript: RwLock::new(Transcript::default()),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// True while a backend call is outstanding
    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::Acquire)
    }

    /// Snapshot of the thread, oldest first
    pub async fn messages(&self) -> Vec<Message> {
        self.transcript.read().await.messages.clone()
    }

    /// Current banner text, if any
    pub async fn error(&self) -> Option<String> {
        self.transcript.read().await.error.clone()
    }

    /// Hide the banner
    pub async fn dismiss_error(&self) {
        self.transcript.write().await.error = None;
    }

    /// Fetch the greeting and make it the only message in the thread
    pub async fn load_greeting(&self) {
        let Some(_typing) = TypingGuard::acquire(&self.typing) else {
            tracing::debug!(session_id = %self.session_id, "Greeting skipped, call already outstanding");
            return;
        };

        let greeting = match self.api.get_greeting(self.session_id.as_str()).await {
            Ok(reply) => Message::from_reply(reply),
            Err(e) => {
                tracing::error!(session_id = %self.session_id, error = %e, "Error loading greeting");
                self.transcript.write().await.error = Some(GREETING_ERROR.to_string());
                Message::bot(FALLBACK_GREETING)
            }
        };

        self.transcript.write().await.messages = vec![greeting];
    }

    /// Send `text` to the backend and append the exchange to the thread
    pub async fn send(&self, text: &str) -> SendOutcome {
        if !is_sendable(text) {
            return SendOutcome::Ignored;
        }

        let Some(_typing) = TypingGuard::acquire(&self.typing) else {
            tracing::debug!(session_id = %self.session_id, "Send ignored, call already outstanding");
            return SendOutcome::Ignored;
        };

        {
            let mut transcript = self.transcript.write().await;
            transcript.messages.push(Message::user(text));
            transcript.error = None;
        }

        match self.api.send_message(text, self.session_id.as_str()).await {
            Ok(reply) => {
                tracing::debug!(session_id = %self.session_id, "Received reply");
                self.transcript.write().await.messages.push(Message::from_reply(reply));
                SendOutcome::Replied
            }
            Err(e) => {
                tracing::error!(session_id = %self.session_id, error = %e, "Error sending message");
                let mut transcript = self.transcript.write().await;
                transcript.error = Some(SEND_ERROR.to_string());
                transcript.messages.push(Message::bot(APOLOGY_MESSAGE));
                SendOutcome::Failed
            }
        }
    }
}

/// Holds the typing flag; releasing happens on drop
struct TypingGuard<'a>(&'a AtomicBool);

impl<'a> TypingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for TypingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ChatReply, ClientError, HealthStatus, InsightLogs, InsightStats};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn reply(message: &str, timestamp: Option<&str>) -> ChatReply {
        ChatReply {
            message: message.to_string(),
            timestamp: timestamp.map(str::to_string),
            session_id: None,
        }
    }

    fn unavailable() -> ClientError {
        ClientError::Api {
            status: 503,
            message: "backend down".to_string(),
        }
    }

    /// Scripted backend; `gate` and `greeting_gate` hold the matching call until notified
    #[derive(Default)]
    struct ScriptedApi {
        greeting_fails: bool,
        greeting_gate: Option<Arc<Notify>>,
        replies: Mutex<VecDeque<Result<ChatReply, ClientError>>>,
        sent: Mutex<Vec<(String, String)>>,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedApi {
        fn with_replies(replies: Vec<Result<ChatReply, ClientError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ChatApi for ScriptedApi {
        async fn send_message(&self, message: &str, session_id: &str) -> Result<ChatReply, ClientError> {
            self.sent
                .lock()
                .unwrap()
                .push((message.to_string(), session_id.to_string()));
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(reply("ok", None)))
        }

        async fn get_greeting(&self, _session_id: &str) -> Result<ChatReply, ClientError> {
            if let Some(gate) = &self.greeting_gate {
                gate.notified().await;
            }
            if self.greeting_fails {
                Err(unavailable())
            } else {
                Ok(reply("Welcome to the diamond store!", Some("2024-01-01T00:00:00Z")))
            }
        }

        async fn health_check(&self) -> Result<HealthStatus, ClientError> {
            Ok(serde_json::json!({"status": "ok"}))
        }

        async fn get_insight_stats(&self) -> Result<InsightStats, ClientError> {
            Ok(InsightStats::new())
        }

        async fn get_insight_logs(&self, _lines: Option<u32>) -> Result<InsightLogs, ClientError> {
            Ok(InsightLogs::default())
        }
    }

    fn contents(messages: &[Message]) -> Vec<(&str, bool)> {
        messages.iter().map(|m| (m.content(), m.is_bot())).collect()
    }

    #[tokio::test]
    async fn test_greeting_success() {
        let session = ChatSession::new(Arc::new(ScriptedApi::default()));
        session.load_greeting().await;

        let messages = session.messages().await;
        assert_eq!(contents(&messages), vec![("Welcome to the diamond store!", true)]);
        assert_eq!(messages[0].timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(session.error().await, None);
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_greeting_failure_uses_fallback() {
        let api = ScriptedApi {
            greeting_fails: true,
            ..Default::default()
        };
        let session = ChatSession::new(Arc::new(api));
        session.load_greeting().await;

        assert_eq!(contents(&session.messages().await), vec![(FALLBACK_GREETING, true)]);
        assert_eq!(session.error().await.as_deref(), Some(GREETING_ERROR));
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_send_round_diamonds() {
        let api = Arc::new(ScriptedApi::with_replies(vec![Ok(reply(
            "Here are round diamonds...",
            Some("2024-01-01T00:00:00Z"),
        ))]));
        let session = ChatSession::with_id(api.clone(), SessionId::from("session_1_abc".to_string()));
        session.load_greeting().await;

        let outcome = session.send("show me round diamonds").await;

        assert_eq!(outcome, SendOutcome::Replied);
        let messages = session.messages().await;
        assert_eq!(
            contents(&messages),
            vec![
                ("Welcome to the diamond store!", true),
                ("show me round diamonds", false),
                ("Here are round diamonds...", true),
            ]
        );
        assert_eq!(messages[2].timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(
            *api.sent.lock().unwrap(),
            vec![("show me round diamonds".to_string(), "session_1_abc".to_string())]
        );
    }

    #[tokio::test]
    async fn test_send_failure_appends_apology() {
        let api = ScriptedApi::with_replies(vec![Err(unavailable())]);
        let session = ChatSession::new(Arc::new(api));
        session.load_greeting().await;

        let outcome = session.send("any princess cuts?").await;

        assert_eq!(outcome, SendOutcome::Failed);
        let messages = session.messages().await;
        assert_eq!(
            contents(&messages[1..]),
            vec![("any princess cuts?", false), (APOLOGY_MESSAGE, true)]
        );
        assert_eq!(session.error().await.as_deref(), Some(SEND_ERROR));
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_next_send_clears_banner() {
        let api = ScriptedApi::with_replies(vec![Err(unavailable()), Ok(reply("Back online", None))]);
        let session = ChatSession::new(Arc::new(api));
        session.load_greeting().await;

        session.send("first").await;
        assert!(session.error().await.is_some());

        session.send("second").await;
        assert_eq!(session.error().await, None);
    }

    #[tokio::test]
    async fn test_dismiss_error() {
        let api = ScriptedApi {
            greeting_fails: true,
            ..Default::default()
        };
        let session = ChatSession::new(Arc::new(api));
        session.load_greeting().await;

        session.dismiss_error().await;
        assert_eq!(session.error().await, None);
        assert_eq!(session.messages().await.len(), 1);
    }

    #[tokio::test]
    async fn test_message_count_grows_by_two_per_send() {
        let api = ScriptedApi::with_replies(vec![
            Ok(reply("one", None)),
            Err(unavailable()),
            Ok(reply("three", None)),
            Err(unavailable()),
        ]);
        let session = ChatSession::new(Arc::new(api));
        session.load_greeting().await;

        let mut previous = session.messages().await;
        for (i, text) in ["a", "b", "c", "d"].iter().enumerate() {
            session.send(text).await;
            let current = session.messages().await;

            assert_eq!(current.len(), 1 + 2 * (i + 1));
            assert_eq!(&current[..previous.len()], &previous[..]);
            assert_eq!(current[current.len() - 2].content(), *text);
            previous = current;
        }
    }

    #[tokio::test]
    async fn test_blank_text_is_ignored() {
        let api = Arc::new(ScriptedApi::default());
        let session = ChatSession::new(api.clone());
        session.load_greeting().await;

        assert_eq!(session.send("").await, SendOutcome::Ignored);
        assert_eq!(session.send("   \t\n").await, SendOutcome::Ignored);

        assert_eq!(session.messages().await.len(), 1);
        assert!(api.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_while_outstanding_is_ignored() {
        let gate = Arc::new(Notify::new());
        let api = ScriptedApi {
            gate: Some(gate.clone()),
            ..Default::default()
        };
        let session = Arc::new(ChatSession::new(Arc::new(api)));
        session.load_greeting().await;

        let first = tokio::spawn({
            let session = session.clone();
            async move { session.send("first").await }
        });

        while !session.is_typing() {
            tokio::task::yield_now().await;
        }

        assert_eq!(session.send("second").await, SendOutcome::Ignored);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), SendOutcome::Replied);

        let messages = session.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content(), "first");
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_send_during_greeting_is_ignored() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(ScriptedApi {
            greeting_gate: Some(gate.clone()),
            ..Default::default()
        });
        let session = Arc::new(ChatSession::new(api.clone()));

        let greeting = tokio::spawn({
            let session = session.clone();
            async move { session.load_greeting().await }
        });

        while !session.is_typing() {
            tokio::task::yield_now().await;
        }

        assert_eq!(session.send("show me round diamonds").await, SendOutcome::Ignored);
        assert!(session.messages().await.is_empty());

        gate.notify_one();
        greeting.await.unwrap();

        assert_eq!(
            contents(&session.messages().await),
            vec![("Welcome to the diamond store!", true)]
        );
        assert!(api.sent.lock().unwrap().is_empty());
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_abandoned_send_releases_typing() {
        let api = ScriptedApi {
            gate: Some(Arc::new(Notify::new())),
            ..Default::default()
        };
        let session = ChatSession::new(Arc::new(api));
        session.load_greeting().await;

        let result = tokio::time::timeout(Duration::from_millis(20), session.send("hello")).await;

        assert!(result.is_err());
        assert!(!session.is_typing());
        // The optimistic user message stays; no reply ever arrives
        let messages = session.messages().await;
        assert_eq!(contents(&messages[1..]), vec![("hello", false)]);
    }
}
