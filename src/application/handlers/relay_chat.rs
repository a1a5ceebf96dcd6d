//! RelayChat command handler.
//!
//! Forwards one conversation to the completion provider behind the fixed
//! construction-assistant system prompt and returns exactly one reply, or a
//! failure from the relay taxonomy. Holds no per-request state, so a single
//! instance serves concurrent requests.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::chat::{CompletionSettings, Turn, FALLBACK_REPLY};
use crate::domain::foundation::TraceId;
use crate::ports::{AIError, AIProvider, CompletionRequest, FinishReason, RequestMetadata};

/// Command carrying the caller's conversation so far.
#[derive(Debug, Clone)]
pub struct RelayChatCommand {
    pub turns: Vec<Turn>,
}

impl RelayChatCommand {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

/// Result of a successful relay.
#[derive(Debug, Clone)]
pub struct RelayChatResult {
    /// Reply text, never blank.
    pub message: String,
}

/// Failure classes of the relay.
///
/// The display strings are the stable texts sent to clients; the
/// conversation controller recognises them by substring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayFailure {
    /// No provider credential configured.
    #[error("OpenAI API key not configured. Please add OPENAI_API_KEY to your environment variables.")]
    NotConfigured,

    #[error("Invalid OpenAI API key. Please check your API key configuration.")]
    InvalidCredential,

    #[error("API access forbidden. Please check your OpenAI account status and billing.")]
    AccessForbidden,

    #[error("OpenAI quota exceeded. Please check your billing and usage limits.")]
    QuotaExceeded,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    /// Anything else; `details` carries the raw cause for diagnostics.
    #[error("Failed to get AI response. Please try again later.")]
    Unclassified { details: String },
}

impl RelayFailure {
    pub fn unclassified(details: impl Into<String>) -> Self {
        Self::Unclassified {
            details: details.into(),
        }
    }

    /// Credential, billing and access failures need operator action.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RelayFailure::NotConfigured
                | RelayFailure::InvalidCredential
                | RelayFailure::AccessForbidden
                | RelayFailure::QuotaExceeded
        )
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            RelayFailure::Unclassified { details } => Some(details),
            _ => None,
        }
    }
}

impl From<AIError> for RelayFailure {
    fn from(err: AIError) -> Self {
        match err {
            AIError::AuthenticationFailed => RelayFailure::InvalidCredential,
            AIError::AccessForbidden { .. } => RelayFailure::AccessForbidden,
            AIError::QuotaExceeded { .. } => RelayFailure::QuotaExceeded,
            AIError::RateLimited { .. } => RelayFailure::RateLimited,
            other => RelayFailure::unclassified(other.to_string()),
        }
    }
}

/// Handler for relaying a conversation to the completion provider.
pub struct RelayChatHandler {
    /// `None` when no credential was configured at startup.
    provider: Option<Arc<dyn AIProvider>>,
    settings: CompletionSettings,
}

impl RelayChatHandler {
    pub fn new(provider: Option<Arc<dyn AIProvider>>, settings: CompletionSettings) -> Self {
        Self { provider, settings }
    }

    /// Relays the conversation and returns one reply.
    ///
    /// # Errors
    ///
    /// - `NotConfigured` without touching the provider when no credential is set
    /// - the provider failure translated into the relay taxonomy otherwise
    pub async fn handle(&self, cmd: RelayChatCommand) -> Result<RelayChatResult, RelayFailure> {
        let Some(provider) = self.provider.as_ref() else {
            tracing::warn!("Chat relay called without an OpenAI API key configured");
            return Err(RelayFailure::NotConfigured);
        };

        let trace_id = TraceId::new();
        let turn_count = cmd.turns.len();
        let request = CompletionRequest::new(RequestMetadata::new(trace_id))
            .with_system_prompt(self.settings.system_prompt.clone())
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature)
            .with_turns(cmd.turns);

        match provider.complete(request).await {
            Ok(response) => {
                match response.finish_reason {
                    FinishReason::Length => tracing::warn!(
                        %trace_id,
                        max_tokens = self.settings.max_tokens,
                        "Reply truncated at the token limit"
                    ),
                    FinishReason::ContentFilter => {
                        tracing::warn!(%trace_id, "Reply cut short by the content filter")
                    }
                    FinishReason::Stop => {}
                }

                let message = if response.content.trim().is_empty() {
                    tracing::warn!(%trace_id, "Provider returned no usable text, using fallback reply");
                    FALLBACK_REPLY.to_string()
                } else {
                    response.content
                };

                tracing::info!(
                    %trace_id,
                    turns = turn_count,
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "Chat relay completed"
                );

                Ok(RelayChatResult { message })
            }
            Err(err) => {
                let failure = RelayFailure::from(err.clone());
                if err.is_transient() {
                    tracing::warn!(%trace_id, error = %err, "Chat relay failed");
                } else {
                    tracing::error!(%trace_id, error = %err, "Chat relay failed");
                }
                Err(failure)
            }
        }
    }
}
