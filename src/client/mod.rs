//! Chatbot Backend Client
//!
//! Outbound calls to the diamond store chatbot backend.
//!
//! ## Endpoints
//!
//! - `POST /chat` - Send a user message
//! - `GET /chat/greeting/:session_id` - Greeting for a new session
//! - `GET /health` - Backend health payload
//! - `GET /insight/stats` - Knowledge base statistics
//! - `GET /insight/logs` - Recent backend log lines
//!
//! Every failure (unreachable host, non-2xx status, undecodable body) is
//! returned to the caller as a [`ClientError`]. There is no retry.

mod dto;
mod http;

pub use dto::{ChatReply, ChatRequest, HealthStatus, InsightLogs, InsightStats};
pub use http::HttpChatClient;

use async_trait::async_trait;
use thiserror::Error;

/// Operations the chat session and insights poller need from the backend
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send a user message and receive the bot's reply
    async fn send_message(&self, message: &str, session_id: &str) -> Result<ChatReply, ClientError>;

    /// Fetch the greeting for a new session
    async fn get_greeting(&self, session_id: &str) -> Result<ChatReply, ClientError>;

    /// Probe backend availability
    async fn health_check(&self) -> Result<HealthStatus, ClientError>;

    /// Fetch knowledge base statistics
    async fn get_insight_stats(&self) -> Result<InsightStats, ClientError>;

    /// Fetch recent backend logs, optionally limited to `lines` entries
    async fn get_insight_logs(&self, lines: Option<u32>) -> Result<InsightLogs, ClientError>;
}

/// Errors that can occur when talking to the chatbot backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid backend URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
