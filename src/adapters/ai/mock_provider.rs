//! Scripted AIProvider for tests and local runs without an OpenAI key.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("Use 4,000 psi mix for the slab.")
//!     .with_error(MockError::RateLimited { retry_after_secs: 5 });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

const MOCK_MODEL: &str = "mock-model-1";

/// Provider that answers from a script and records what it was asked.
///
/// Clones share the script and the call log.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    script: VecDeque<MockResponse>,
    calls: Vec<CompletionRequest>,
}

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success { content: String, usage: TokenUsage },
    Error(MockError),
}

/// Provider failures a script can inject.
#[derive(Debug, Clone)]
pub enum MockError {
    AuthenticationFailed,
    AccessForbidden { message: String },
    QuotaExceeded { message: String },
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::AccessForbidden { message } => AIError::access_forbidden(message),
            MockError::QuotaExceeded { message } => AIError::quota_exceeded(message),
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a reply to the script.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.state().script.push_back(MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
        });
        self
    }

    /// Appends a failure to the script.
    pub fn with_error(self, error: MockError) -> Self {
        self.state().script.push_back(MockResponse::Error(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    /// Requests received so far, oldest first.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.state().calls.clone()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let next = {
            let mut state = self.state();
            state.calls.push(request);
            state.script.pop_front()
        };

        // An exhausted script keeps answering with a canned reply.
        let (content, usage) = match next {
            Some(MockResponse::Error(err)) => return Err(err.into()),
            Some(MockResponse::Success { content, usage }) => (content, usage),
            None => ("Mock response".to_string(), TokenUsage::new(5, 10)),
        };

        Ok(CompletionResponse {
            content,
            usage,
            model: MOCK_MODEL.to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL, 16385)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TraceId;
    use crate::domain::chat::Turn;
    use crate::ports::RequestMetadata;

    fn ask(text: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(TraceId::new()))
            .with_turns(vec![Turn::user(text)])
    }

    #[tokio::test]
    async fn script_is_consumed_in_order_then_canned_reply() {
        let provider = MockAIProvider::new()
            .with_response("Pour on Tuesday.")
            .with_error(MockError::RateLimited { retry_after_secs: 30 });

        let first = provider.complete(ask("When to pour?")).await.unwrap();
        assert_eq!(first.content, "Pour on Tuesday.");
        assert_eq!(first.model, MOCK_MODEL);

        let second = provider.complete(ask("And then?")).await.unwrap_err();
        assert_eq!(second, AIError::rate_limited(30));

        let third = provider.complete(ask("Anything else?")).await.unwrap();
        assert_eq!(third.content, "Mock response");
    }

    #[tokio::test]
    async fn clones_share_the_call_log() {
        let provider = MockAIProvider::new();
        let observer = provider.clone();

        provider.complete(ask("Rebar size?")).await.unwrap();

        assert_eq!(observer.call_count(), 1);
        assert_eq!(observer.get_calls()[0].messages[0].content, "Rebar size?");
    }

    #[test]
    fn injected_errors_keep_their_class() {
        let err: AIError = MockError::AccessForbidden {
            message: "billing hold".to_string(),
        }
        .into();
        assert_eq!(err, AIError::access_forbidden("billing hold"));

        let err: AIError = MockError::Timeout { timeout_secs: 30 }.into();
        assert_eq!(err, AIError::Timeout { timeout_secs: 30 });
    }

    #[test]
    fn provider_info_names_the_mock() {
        let info = MockAIProvider::new().provider_info();
        assert_eq!(info.name, "mock");
        assert_eq!(info.model, MOCK_MODEL);
    }
}
