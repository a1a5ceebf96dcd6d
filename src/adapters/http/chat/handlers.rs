//! HTTP handlers for the chat relay endpoint.
//!
//! These handlers connect Axum routes to the relay command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{RelayChatCommand, RelayChatHandler, RelayFailure};

use super::dto::{ChatRequest, ChatResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub relay: Arc<RelayChatHandler>,
}

impl ChatAppState {
    pub fn new(relay: Arc<RelayChatHandler>) -> Self {
        Self { relay }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chat
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Relay a conversation and return one assistant reply.
///
/// # Errors
/// - 401 Unauthorized: provider rejected the credential
/// - 403 Forbidden: provider account restricted
/// - 429 Too Many Requests: rate limited or quota exceeded
/// - 500 Internal Server Error: not configured, malformed body, or unclassified failure
pub async fn post_chat(
    State(state): State<ChatAppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed chat request");
        ChatApiError(RelayFailure::unclassified(rejection.body_text()))
    })?;

    let command = RelayChatCommand::new(request.into_turns());
    let result = state.relay.handle(command).await?;

    Ok((
        StatusCode::OK,
        Json(ChatResponse {
            message: result.message,
        }),
    ))
}

/// GET /health - Liveness check.
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts relay failures to HTTP responses.
#[derive(Debug)]
pub struct ChatApiError(pub RelayFailure);

impl From<RelayFailure> for ChatApiError {
    fn from(failure: RelayFailure) -> Self {
        Self(failure)
    }
}

impl ChatApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RelayFailure::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            RelayFailure::InvalidCredential => StatusCode::UNAUTHORIZED,
            RelayFailure::AccessForbidden => StatusCode::FORBIDDEN,
            RelayFailure::QuotaExceeded | RelayFailure::RateLimited => {
                StatusCode::TOO_MANY_REQUESTS
            }
            RelayFailure::Unclassified { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_statuses() {
        let cases = [
            (RelayFailure::NotConfigured, StatusCode::INTERNAL_SERVER_ERROR),
            (RelayFailure::InvalidCredential, StatusCode::UNAUTHORIZED),
            (RelayFailure::AccessForbidden, StatusCode::FORBIDDEN),
            (RelayFailure::QuotaExceeded, StatusCode::TOO_MANY_REQUESTS),
            (RelayFailure::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (
                RelayFailure::unclassified("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (failure, status) in cases {
            assert_eq!(ChatApiError(failure).status(), status);
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        assert_eq!(health().await, "ok");
    }
}
