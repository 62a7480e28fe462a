//! Reqwest-backed chat client

use super::ApiError;
use crate::protocol::{ChatReply, ChatRequest};
use crate::widget::ChatApi;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Message sent by the reachability probe. Only the round trip matters; the
/// reply is discarded.
const PROBE_MESSAGE: &str = "test";

/// Per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat client for the sentiment backend
pub struct HttpChatClient {
    client: Client,
    chat_url: String,
}

impl HttpChatClient {
    /// Build a client for the backend at `base_url`, e.g.
    /// `http://127.0.0.1:5000`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            chat_url: format!("{}/chat", base_url.trim_end_matches('/')),
        }
    }

    async fn post_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::transport(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    ApiError::transport(format!("Connection failed: {e}"))
                } else {
                    ApiError::transport(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::decode(
                status.as_u16(),
                format!("Failed to parse response: {e} - body: {body}"),
            )
        })
    }
}

#[async_trait]
impl ChatApi for HttpChatClient {
    async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.post_chat(message).await
    }

    async fn probe(&self) -> Result<(), ApiError> {
        self.post_chat(PROBE_MESSAGE).await?;
        Ok(())
    }
}
