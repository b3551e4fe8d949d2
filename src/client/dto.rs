//! Request/Response DTOs for the chatbot backend

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: &'a str,
}

/// Reply from `POST /chat` and `GET /chat/greeting/:session_id`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub message: String,
    /// ISO-8601; the backend may leave it out
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Knowledge base statistics, arbitrary key to JSON value
pub type InsightStats = BTreeMap<String, serde_json::Value>;

/// Health payload; the shape belongs to the backend
pub type HealthStatus = serde_json::Value;

/// Reply from `GET /insight/logs`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InsightLogs {
    #[serde(default)]
    pub logs: Vec<String>,
}
