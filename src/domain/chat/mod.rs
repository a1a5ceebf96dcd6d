//! Chat module - the assistant conversation model.
//!
//! - `MessageLog` - append-only log seeded with the greeting
//! - `ChatMessage` / `Turn` - display message and its relay projection
//! - `ControllerState` - per-turn state machine
//! - `FailureKind` - classification of failed turns and their notices

mod input;
mod log;
mod message;
mod notices;
mod prompt;
mod state;

pub use input::{Key, KeyPress, QuickAction};
pub use log::MessageLog;
pub use message::{ChatMessage, Role, Turn};
pub use notices::{FailureKind, CONFIG_BANNER, PROGRESS_INDICATOR};
pub use prompt::{
    CompletionSettings, CONSTRUCTION_SYSTEM_PROMPT, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    FALLBACK_REPLY, GREETING,
};
pub use state::ControllerState;
