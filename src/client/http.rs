//! HTTP implementation of [`ChatApi`] on top of reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::dto::{ChatReply, ChatRequest, HealthStatus, InsightLogs, InsightStats};
use super::{ChatApi, ClientError};

/// Chatbot backend client
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: Client,
    base_url: String,
}

impl HttpChatClient {
    /// Create a client for the backend at `base_url`
    ///
    /// Timeouts are left at the transport defaults.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ChatApi for HttpChatClient {
    async fn send_message(&self, message: &str, session_id: &str) -> Result<ChatReply, ClientError> {
        let response = self
            .client
            .post(self.url("/chat"))
            .json(&ChatRequest { message, session_id })
            .send()
            .await
            .map_err(|e| log_failure("send message", e))?;

        read_json(response, "send message").await
    }

    async fn get_greeting(&self, session_id: &str) -> Result<ChatReply, ClientError> {
        let path = format!("/chat/greeting/{}", urlencoding::encode(session_id));

        let response = self
            .client
            .get(self.url(&path))
            .send()
            .await
            .map_err(|e| log_failure("get greeting", e))?;

        read_json(response, "get greeting").await
    }

    async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| log_failure("check health", e))?;

        read_json(response, "check health").await
    }

    async fn get_insight_stats(&self) -> Result<InsightStats, ClientError> {
        let response = self
            .client
            .get(self.url("/insight/stats"))
            .send()
            .await
            .map_err(|e| log_failure("fetch insight stats", e))?;

        read_json(response, "fetch insight stats").await
    }

    async fn get_insight_logs(&self, lines: Option<u32>) -> Result<InsightLogs, ClientError> {
        let mut request = self.client.get(self.url("/insight/logs"));
        if let Some(lines) = lines {
            request = request.query(&[("lines", lines)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| log_failure("fetch insight logs", e))?;

        read_json(response, "fetch insight logs").await
    }
}

fn log_failure(operation: &str, error: reqwest::Error) -> ClientError {
    tracing::error!(error = %error, "Error trying to {}", operation);
    ClientError::Request(error)
}

/// Decode a 2xx body, or turn the status and body text into an error
async fn read_json<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response.json().await.map_err(|e| log_failure(operation, e));
    }

    let message = response.text().await.unwrap_or_default();
    tracing::error!(status = status.as_u16(), "Error trying to {}: {}", operation, message);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
