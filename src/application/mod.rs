//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The relay handler serves the HTTP endpoint; the conversation controller
//! is the client side of the same exchange.

pub mod handlers;

pub use handlers::{
    ConversationController, IgnoredReason, RelayChatCommand, RelayChatHandler, RelayChatResult,
    RelayFailure, SubmitOutcome,
};
