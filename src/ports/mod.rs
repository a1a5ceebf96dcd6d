//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - the hosted completion API behind the relay endpoint
//! - `ChatRelay` - the relay endpoint as seen by the conversation controller

mod ai_provider;
mod chat_relay;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use chat_relay::{ChatRelay, RelayError};
