//! Conversation controller.
//!
//! Owns the visible message log for one conversation and runs one
//! request/response cycle per submitted turn. A single-permit semaphore is
//! the in-flight guard: a submission that cannot take the permit is ignored,
//! never queued.
//!
//! The controller never returns an error to its caller. Every failed turn
//! becomes an error-flagged assistant message, plus the configuration banner
//! for credential, billing and access failures.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{Semaphore, SemaphorePermit};

use crate::domain::chat::{
    ChatMessage, ControllerState, FailureKind, Key, KeyPress, MessageLog, QuickAction, Turn,
    CONFIG_BANNER, PROGRESS_INDICATOR,
};
use crate::domain::foundation::StateMachine;
use crate::ports::ChatRelay;

/// What happened to a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended and the relay was not called.
    Ignored(IgnoredReason),
    /// The reply was appended.
    Replied,
    /// An error notice of this class was appended.
    Failed(FailureKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    EmptyInput,
    TurnInFlight,
}

#[derive(Debug)]
struct ControllerInner {
    log: MessageLog,
    draft: String,
    state: ControllerState,
    config_banner: bool,
}

impl ControllerInner {
    fn advance(&mut self, target: ControllerState) {
        match self.state.transition_to(target) {
            Ok(next) => self.state = next,
            Err(err) => {
                tracing::error!(from = ?self.state, to = ?target, error = %err, "Controller state out of sync");
                self.state = target;
            }
        }
    }
}

/// Holds the in-flight permit for one turn.
///
/// Dropping it returns the controller to `Idle` before the permit is
/// released, so an abandoned `submit` future cannot leave the input disabled.
struct TurnGuard<'a> {
    inner: &'a Mutex<ControllerInner>,
    _permit: SemaphorePermit<'a>,
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        let mut inner = lock(self.inner);
        if inner.state.is_busy() {
            tracing::debug!(state = ?inner.state, "Turn ended without a reply");
            inner.advance(ControllerState::Idle);
        }
    }
}

fn lock(inner: &Mutex<ControllerInner>) -> MutexGuard<'_, ControllerInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives one conversation against a chat relay.
pub struct ConversationController {
    relay: Arc<dyn ChatRelay>,
    inner: Mutex<ControllerInner>,
    in_flight: Semaphore,
}

impl ConversationController {
    /// Creates a controller whose log holds only the greeting.
    pub fn new(relay: Arc<dyn ChatRelay>) -> Self {
        Self {
            relay,
            inner: Mutex::new(ControllerInner {
                log: MessageLog::seeded(),
                draft: String::new(),
                state: ControllerState::Idle,
                config_banner: false,
            }),
            in_flight: Semaphore::new(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControllerInner> {
        lock(&self.inner)
    }

    /// Replaces the input draft. Ignored while a turn is in flight.
    pub fn set_input(&self, text: impl Into<String>) {
        let mut inner = self.lock();
        if inner.state.input_enabled() {
            inner.draft = text.into();
        }
    }

    /// Fills the draft with a canned prompt. Returns false while busy.
    pub fn apply_quick_action(&self, action: QuickAction) -> bool {
        let mut inner = self.lock();
        if !inner.state.input_enabled() {
            return false;
        }
        inner.draft = action.prompt().to_string();
        true
    }

    /// Feeds one key press from the input field.
    ///
    /// Enter submits; Shift+Enter inserts a newline; anything else edits the
    /// draft. Returns the submit outcome when the key was a submit.
    pub async fn handle_key(&self, key: KeyPress) -> Option<SubmitOutcome> {
        if key.is_submit() {
            return Some(self.submit().await);
        }

        let mut inner = self.lock();
        if inner.state.input_enabled() {
            match key.key {
                Key::Enter => inner.draft.push('\n'),
                Key::Other(c) => inner.draft.push(c),
            }
        }
        None
    }

    /// Submits the current draft as a user turn.
    pub async fn submit(&self) -> SubmitOutcome {
        let Ok(permit) = self.in_flight.try_acquire() else {
            tracing::debug!("Submit ignored, a turn is already in flight");
            return SubmitOutcome::Ignored(IgnoredReason::TurnInFlight);
        };
        let _turn = TurnGuard {
            inner: &self.inner,
            _permit: permit,
        };

        let history = {
            let mut inner = self.lock();
            if inner.draft.trim().is_empty() {
                return SubmitOutcome::Ignored(IgnoredReason::EmptyInput);
            }

            let draft = std::mem::take(&mut inner.draft);
            if let Err(err) = inner.log.append_user(draft) {
                tracing::debug!(error = %err, "Submit ignored, draft rejected");
                return SubmitOutcome::Ignored(IgnoredReason::EmptyInput);
            }
            inner.advance(ControllerState::Submitting);

            let history = inner.log.turns();
            inner.advance(ControllerState::AwaitingReply);
            history
        };

        tracing::debug!(turns = history.len(), "Sending conversation to relay");
        let result = self.relay.send(history).await;

        let mut inner = self.lock();
        let outcome = match result {
            Ok(reply) => {
                inner.log.append_assistant(reply);
                inner.config_banner = false;
                SubmitOutcome::Replied
            }
            Err(err) => {
                // Rejected displays as the endpoint's own error text.
                let kind = FailureKind::classify(&err.to_string());
                tracing::warn!(error = %err, kind = ?kind, "Chat turn failed");
                inner.log.append_error_notice(kind.notice());
                if kind.raises_config_banner() || err.is_config_error() {
                    inner.config_banner = true;
                }
                SubmitOutcome::Failed(kind)
            }
        };
        inner.advance(ControllerState::Idle);
        outcome
    }

    /// Snapshot of the log in display order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().log.messages().to_vec()
    }

    /// The log as it would be sent to the relay.
    pub fn history(&self) -> Vec<Turn> {
        self.lock().log.turns()
    }

    pub fn message_count(&self) -> usize {
        self.lock().log.messages().len()
    }

    pub fn state(&self) -> ControllerState {
        self.lock().state
    }

    pub fn input(&self) -> String {
        self.lock().draft.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().state.is_busy()
    }

    /// Submit control is enabled only when idle with a non-blank draft.
    pub fn can_submit(&self) -> bool {
        let inner = self.lock();
        inner.state.accepts_submission() && !inner.draft.trim().is_empty()
    }

    pub fn has_config_error(&self) -> bool {
        self.lock().config_banner
    }

    pub fn config_banner(&self) -> Option<&'static str> {
        self.has_config_error().then_some(CONFIG_BANNER)
    }

    pub fn progress_indicator(&self) -> Option<&'static str> {
        self.is_loading().then_some(PROGRESS_INDICATOR)
    }
}
