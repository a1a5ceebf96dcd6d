//! HTTP ChatRelay - reaches the chat endpoint over the network.
//!
//! A non-success answer becomes `RelayError::Rejected`, carrying the body's
//! `error` text (or `HTTP error! status: <code>` when there is none) and its
//! `isConfigError` flag.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::adapters::http::chat::{ChatRequest, ChatResponse, ErrorResponse};
use crate::domain::chat::Turn;
use crate::ports::{ChatRelay, RelayError};

/// Relay client for `POST {base_url}/api/chat`.
#[derive(Debug, Clone)]
pub struct HttpChatRelay {
    endpoint: String,
    client: Client,
}

impl HttpChatRelay {
    /// Creates a relay for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// - `Transport` if the HTTP client cannot be built
    pub fn new(base_url: &str) -> Result<Self, RelayError> {
        Self::with_timeout(base_url, Duration::from_secs(120))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Builds the client-side error for a non-success answer.
fn rejection(status: u16, body: &str) -> RelayError {
    let parsed: Option<ErrorResponse> = serde_json::from_str(body).ok();
    let is_config_error = parsed.as_ref().is_some_and(ErrorResponse::is_config_error);
    let message = parsed
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status));

    RelayError::rejected(status, message, is_config_error)
}

#[async_trait]
impl ChatRelay for HttpChatRelay {
    async fn send(&self, turns: Vec<Turn>) -> Result<String, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest::from_turns(turns))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Chat endpoint rejected request");
            return Err(rejection(status.as_u16(), &body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| RelayError::Decode(e.to_string()))?;

        Ok(body.message)
    }
}
