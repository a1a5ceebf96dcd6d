//! Mock ChatRelay for testing the conversation controller.
//!
//! Replies are consumed in order; once the queue is empty the relay echoes a
//! fixed acknowledgement. An optional gate holds every call open until the
//! test releases it, which makes the in-flight window observable.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

use crate::domain::chat::Turn;
use crate::ports::{ChatRelay, RelayError};

/// Mock relay for testing.
#[derive(Debug, Clone, Default)]
pub struct MockChatRelay {
    replies: Arc<Mutex<VecDeque<Result<String, RelayError>>>>,
    calls: Arc<Mutex<Vec<Vec<Turn>>>>,
    gate: Option<Arc<Notify>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockChatRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, message: impl Into<String>) -> Self {
        locked(&self.replies).push_back(Ok(message.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: RelayError) -> Self {
        locked(&self.replies).push_back(Err(error));
        self
    }

    /// Holds every call until the returned `Notify` is signalled with `notify_one`.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Histories received, one entry per call.
    pub fn get_calls(&self) -> Vec<Vec<Turn>> {
        locked(&self.calls).clone()
    }
}

#[async_trait]
impl ChatRelay for MockChatRelay {
    async fn send(&self, turns: Vec<Turn>) -> Result<String, RelayError> {
        locked(&self.calls).push(turns);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        locked(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Ok("Noted.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_order_then_default() {
        let relay = MockChatRelay::new()
            .with_reply("First")
            .with_error(RelayError::Transport("refused".to_string()));

        assert_eq!(relay.send(vec![]).await.unwrap(), "First");
        assert!(relay.send(vec![]).await.is_err());
        assert_eq!(relay.send(vec![]).await.unwrap(), "Noted.");
        assert_eq!(relay.call_count(), 3);
    }

    #[tokio::test]
    async fn records_histories() {
        let relay = MockChatRelay::new();
        relay.send(vec![Turn::user("hi")]).await.unwrap();

        assert_eq!(relay.get_calls(), vec![vec![Turn::user("hi")]]);
    }
}
