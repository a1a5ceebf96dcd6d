//! Append-only conversation log.

use crate::domain::foundation::{MessageId, ValidationError};

use super::message::{ChatMessage, Turn};
use super::prompt::GREETING;

/// Ordered, append-only message log for a single conversation.
///
/// The log always starts with the assistant greeting. Messages are never
/// edited or removed, and ids are handed out in append order.
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    next_id: MessageId,
}

impl MessageLog {
    /// Creates a log holding only the greeting.
    pub fn seeded() -> Self {
        let greeting = ChatMessage::assistant(MessageId::FIRST, GREETING);
        Self {
            messages: vec![greeting],
            next_id: MessageId::FIRST.next(),
        }
    }

    /// Appends a user message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is blank; the log is left unchanged
    pub fn append_user(&mut self, content: impl Into<String>) -> Result<&ChatMessage, ValidationError> {
        let message = ChatMessage::user(self.next_id, content)?;
        Ok(self.push(message))
    }

    /// Appends a genuine assistant reply.
    pub fn append_assistant(&mut self, content: impl Into<String>) -> &ChatMessage {
        let message = ChatMessage::assistant(self.next_id, content);
        self.push(message)
    }

    /// Appends a failure notice on behalf of the assistant.
    pub fn append_error_notice(&mut self, content: impl Into<String>) -> &ChatMessage {
        let message = ChatMessage::error_notice(self.next_id, content);
        self.push(message)
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.next_id = self.next_id.next();
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Full history in display order, reduced to `{role, content}`.
    pub fn turns(&self) -> Vec<Turn> {
        self.messages.iter().map(ChatMessage::to_turn).collect()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::Role;

    #[test]
    fn seeded_log_starts_with_greeting() {
        let log = MessageLog::seeded();
        assert_eq!(log.messages().len(), 1);
        let first = &log.messages()[0];
        assert_eq!(first.role(), Role::Assistant);
        assert_eq!(first.content(), GREETING);
        assert_eq!(first.id(), MessageId::FIRST);
        assert!(!first.is_error());
    }

    #[test]
    fn ids_increase_in_append_order() {
        let mut log = MessageLog::seeded();
        log.append_user("How thick should a slab be?").unwrap();
        log.append_assistant("Usually 4 inches for residential.");
        log.append_error_notice("Rate limit");

        let ids: Vec<String> = log.messages().iter().map(|m| m.id().to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn blank_user_message_leaves_log_unchanged() {
        let mut log = MessageLog::seeded();
        assert!(log.append_user("   ").is_err());
        assert_eq!(log.messages().len(), 1);

        // the failed append must not burn an id
        let msg = log.append_user("ok").unwrap();
        assert_eq!(msg.id(), MessageId::FIRST.next());
    }

    #[test]
    fn turns_follow_display_order() {
        let mut log = MessageLog::seeded();
        log.append_user("first").unwrap();
        log.append_error_notice("failed");
        log.append_user("second").unwrap();

        let turns = log.turns();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0], Turn::assistant(GREETING));
        assert_eq!(turns[1], Turn::user("first"));
        assert_eq!(turns[2], Turn::assistant("failed"));
        assert_eq!(turns[3], Turn::user("second"));
    }
}
