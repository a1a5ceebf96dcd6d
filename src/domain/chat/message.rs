//! Message entity for the assistant conversation.
//!
//! Messages are immutable records of user/assistant exchanges. Besides the
//! role and content sent to the relay, each message carries display-only
//! fields: its id, creation time, and whether it is a synthesized failure
//! notice.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp, ValidationError};

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User input.
    User,
    /// Assistant reply or failure notice.
    Assistant,
}

/// The `{role, content}` projection of a message that travels to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Creates a new turn.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// An immutable message in the conversation log.
///
/// # Invariants
///
/// - `id` is unique within its log and increases with append order
/// - user messages have non-blank content (validated at construction)
/// - only assistant messages can be error notices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: MessageId,
    role: Role,
    content: String,
    timestamp: Timestamp,
    is_error: bool,
}

impl ChatMessage {
    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is empty or whitespace only
    pub fn user(id: MessageId, content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self::build(id, Role::User, content, false))
    }

    /// Creates a genuine assistant reply.
    pub fn assistant(id: MessageId, content: impl Into<String>) -> Self {
        Self::build(id, Role::Assistant, content.into(), false)
    }

    /// Creates an assistant message standing in for a failed turn.
    pub fn error_notice(id: MessageId, content: impl Into<String>) -> Self {
        Self::build(id, Role::Assistant, content.into(), true)
    }

    fn build(id: MessageId, role: Role, content: String, is_error: bool) -> Self {
        Self {
            id,
            role,
            content,
            timestamp: Timestamp::now(),
            is_error,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Local send time as shown under the bubble.
    pub fn display_time(&self) -> String {
        self.timestamp.display_time()
    }

    /// Returns true if this message is from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Strips the display-only fields.
    pub fn to_turn(&self) -> Turn {
        Turn::new(self.role, self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_time_matches_timestamp() {
        let message = ChatMessage::assistant(MessageId::FIRST, "Hello");
        assert_eq!(message.display_time(), message.timestamp().display_time());
    }

    #[test]
    fn user_message_rejects_blank_content() {
        assert!(ChatMessage::user(MessageId::FIRST, "").is_err());
        assert!(ChatMessage::user(MessageId::FIRST, "  \n\t").is_err());
    }

    #[test]
    fn user_message_keeps_content_verbatim() {
        let msg = ChatMessage::user(MessageId::FIRST, "  rebar spacing?  ").unwrap();
        assert_eq!(msg.content(), "  rebar spacing?  ");
        assert!(msg.is_user());
        assert!(!msg.is_error());
    }

    #[test]
    fn error_notice_is_flagged_assistant_message() {
        let msg = ChatMessage::error_notice(MessageId::FIRST, "Rate limit");
        assert_eq!(msg.role(), Role::Assistant);
        assert!(msg.is_error());
    }

    #[test]
    fn to_turn_strips_display_fields() {
        let msg = ChatMessage::error_notice(MessageId::FIRST.next(), "offline");
        assert_eq!(msg.to_turn(), Turn::assistant("offline"));
    }

    #[test]
    fn turn_serializes_with_lowercase_role() {
        let json = serde_json::to_value(Turn::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn turn_rejects_system_role() {
        let parsed = serde_json::from_str::<Turn>(r#"{"role":"system","content":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn chat_message_serializes_camel_case() {
        let msg = ChatMessage::assistant(MessageId::FIRST, "hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["isError"], false);
        assert_eq!(json["id"], 1);
        assert_eq!(json["role"], "assistant");
    }
}
