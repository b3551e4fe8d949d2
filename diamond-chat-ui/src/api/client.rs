//! HTTP API Client
//!
//! Functions for communicating with the diamond store chatbot backend.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const API_URL_KEY: &str = "diamond_chat_api_url";

/// Get the API base URL: local storage, then the build environment, then the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    let url = stored
        .or_else(|| option_env!("DIAMOND_CHAT_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Reply from `/chat` and `/chat/greeting/:session_id`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Knowledge base statistics
pub type InsightStats = BTreeMap<String, serde_json::Value>;

#[derive(Debug, serde::Deserialize)]
struct LogsResponse {
    #[serde(default)]
    logs: Vec<String>,
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    detail: String,
}

// ============ API Functions ============

/// Send a message to the chatbot
pub async fn send_message(message: &str, session_id: &str) -> Result<ChatReply, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest<'a> {
        message: &'a str,
        session_id: &'a str,
    }

    let response = Request::post(&format!("{}/chat", get_api_base()))
        .json(&ChatRequest { message, session_id })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// Get the greeting message for a session
pub async fn get_greeting(session_id: &str) -> Result<ChatReply, String> {
    let encoded: String = js_sys::encode_uri_component(session_id).into();

    let response = Request::get(&format!("{}/chat/greeting/{}", get_api_base(), encoded))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// Check API health
pub async fn health_check() -> Result<serde_json::Value, String> {
    let response = Request::get(&format!("{}/health", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// Fetch knowledge base statistics
pub async fn fetch_insight_stats() -> Result<InsightStats, String> {
    let response = Request::get(&format!("{}/insight/stats", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// Fetch recent backend logs
pub async fn fetch_insight_logs(lines: Option<u32>) -> Result<Vec<String>, String> {
    let mut url = format!("{}/insight/logs", get_api_base());
    if let Some(lines) = lines {
        url.push_str(&format!("?lines={}", lines));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let result: LogsResponse = read_json(response).await?;
    Ok(result.logs)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiError>().await {
            Ok(error) => error.detail,
            Err(_) => format!("HTTP {}", status),
        });
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
