//! # Diamond Chat
//!
//! Client for the diamond store assistant: a chat thread backed by a remote
//! chatbot API, plus an insights dashboard that polls backend statistics and
//! logs.
//!
//! ## Modules
//!
//! - [`client`]: HTTP client for the chatbot backend
//! - [`session`]: Conversation state for one session
//! - [`input`]: Message box validation
//! - [`insights`]: Background polling for the dashboard
//! - [`render`]: Plain-text views for the terminal
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use diamond_chat::{ChatSession, HttpChatClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpChatClient::new("http://localhost:8000")?);
//!     let session = ChatSession::new(api);
//!
//!     session.load_greeting().await;
//!     session.send("show me round diamonds").await;
//!
//!     for message in session.messages().await {
//!         println!("{}", message.content());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod input;
pub mod insights;
pub mod render;
pub mod session;

pub use client::{ChatApi, ChatReply, ClientError, HttpChatClient, InsightLogs, InsightStats};

pub use config::{ApiConfig, Config, ConfigError, InsightsConfig, LoggingConfig};

pub use input::Composer;

pub use insights::{InsightSnapshot, InsightsPoller, PollerConfig, PollerHandle};

pub use session::{ChatSession, Message, SendOutcome, SessionId};
