//! Chat Relay Adapters.
//!
//! Implementations of the ChatRelay port.
//!
//! - `HttpChatRelay` - POSTs to a running chat endpoint
//! - `MockChatRelay` - Scripted replies for controller tests

mod http_relay;
mod mock_relay;

pub use http_relay::HttpChatRelay;
pub use mock_relay::MockChatRelay;
