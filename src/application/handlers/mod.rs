//! Application handlers.
//!
//! - `RelayChatHandler` - forwards one conversation to the completion provider
//! - `ConversationController` - owns the message log and runs one turn at a time

mod conversation_controller;
mod relay_chat;

pub use conversation_controller::{ConversationController, IgnoredReason, SubmitOutcome};
pub use relay_chat::{RelayChatCommand, RelayChatHandler, RelayChatResult, RelayFailure};
