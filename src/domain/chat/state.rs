//! Conversation controller state machine.
//!
//! A turn moves `Idle -> Submitting -> AwaitingReply -> Idle`. A turn whose
//! reply is abandoned takes the same `AwaitingReply -> Idle` edge with nothing
//! appended.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of a conversation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    /// Waiting for user input.
    #[default]
    Idle,

    /// Input taken, user message being appended.
    Submitting,

    /// Relay call in flight.
    AwaitingReply,
}

impl ControllerState {
    /// Returns true if a new turn may start.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a turn is being processed.
    pub fn is_busy(&self) -> bool {
        !self.accepts_submission()
    }

    /// The input field is editable only while idle.
    pub fn input_enabled(&self) -> bool {
        self.accepts_submission()
    }
}

impl StateMachine for ControllerState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ControllerState::*;
        matches!(
            (self, target),
            (Idle, Submitting) | (Submitting, AwaitingReply) | (AwaitingReply, Idle)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(ControllerState::default(), ControllerState::Idle);
    }

    #[test]
    fn only_idle_accepts_submission() {
        assert!(ControllerState::Idle.accepts_submission());
        assert!(!ControllerState::Submitting.accepts_submission());
        assert!(!ControllerState::AwaitingReply.accepts_submission());
    }

    #[test]
    fn input_disabled_while_busy() {
        assert!(ControllerState::Idle.input_enabled());
        assert!(!ControllerState::AwaitingReply.input_enabled());
        assert!(ControllerState::Submitting.is_busy());
    }

    #[test]
    fn full_turn_cycle_is_valid() {
        let state = ControllerState::Idle;
        let state = state.transition_to(ControllerState::Submitting).unwrap();
        let state = state.transition_to(ControllerState::AwaitingReply).unwrap();
        let state = state.transition_to(ControllerState::Idle).unwrap();
        assert_eq!(state, ControllerState::Idle);
    }

    #[test]
    fn cannot_skip_or_reverse_steps() {
        assert!(ControllerState::Idle
            .transition_to(ControllerState::AwaitingReply)
            .is_err());
        assert!(ControllerState::AwaitingReply
            .transition_to(ControllerState::Submitting)
            .is_err());
        assert!(ControllerState::Submitting
            .transition_to(ControllerState::Idle)
            .is_err());
    }

    #[test]
    fn every_state_has_a_way_forward() {
        use ControllerState::*;
        for state in [Idle, Submitting, AwaitingReply] {
            assert!([Idle, Submitting, AwaitingReply]
                .iter()
                .any(|target| state.can_transition_to(target)));
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&ControllerState::AwaitingReply).unwrap();
        assert_eq!(json, "\"awaiting_reply\"");
    }
}
