//! HTTP DTOs for the chat relay endpoint.
//!
//! Shared by the endpoint and the HTTP relay client, so both sides agree on
//! the wire shape.

use serde::{Deserialize, Serialize};

use crate::application::handlers::RelayFailure;
use crate::domain::chat::{Role, Turn};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/chat`. A body without `messages` reads as an empty history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatTurnDto>,
}

impl ChatRequest {
    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Self {
            messages: turns.into_iter().map(ChatTurnDto::from).collect(),
        }
    }

    pub fn into_turns(self) -> Vec<Turn> {
        self.messages.into_iter().map(Turn::from).collect()
    }
}

/// One `{role, content}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnDto {
    pub role: ChatRoleDto,
    pub content: String,
}

/// Roles a caller may send. System messages are injected server-side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRoleDto {
    User,
    Assistant,
}

impl From<Turn> for ChatTurnDto {
    fn from(turn: Turn) -> Self {
        let role = match turn.role {
            Role::User => ChatRoleDto::User,
            Role::Assistant => ChatRoleDto::Assistant,
        };
        Self {
            role,
            content: turn.content,
        }
    }
}

impl From<ChatTurnDto> for Turn {
    fn from(dto: ChatTurnDto) -> Self {
        let role = match dto.role {
            ChatRoleDto::User => Role::User,
            ChatRoleDto::Assistant => Role::Assistant,
        };
        Turn::new(role, dto.content)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Error body.
///
/// `isConfigError` is only present when true; `details` only for
/// unclassified failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_config_error: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn is_config_error(&self) -> bool {
        self.is_config_error.unwrap_or(false)
    }
}

impl From<&RelayFailure> for ErrorResponse {
    fn from(failure: &RelayFailure) -> Self {
        Self {
            error: Some(failure.to_string()),
            is_config_error: failure.is_config_error().then_some(true),
            details: failure.details().map(str::to_string),
        }
    }
}
