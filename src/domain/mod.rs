//! Domain layer - the assistant's vocabulary and rules.

pub mod chat;
pub mod foundation;
