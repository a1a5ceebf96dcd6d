//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion providers (OpenAI, mock)
//! - `http` - The axum chat endpoint
//! - `relay` - Clients of that endpoint (HTTP, mock)

pub mod ai;
pub mod http;
pub mod relay;
