//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while building or advancing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    pub fn invalid_transition(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        ValidationError::InvalidTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_names_the_field() {
        let err = ValidationError::empty_field("content");
        assert_eq!(err.to_string(), "Field 'content' cannot be empty");
    }

    #[test]
    fn invalid_transition_names_both_states() {
        #[derive(Debug)]
        enum Step {
            Idle,
            Done,
        }
        let err = ValidationError::invalid_transition(Step::Done, Step::Idle);
        assert_eq!(err.to_string(), "Cannot transition from Done to Idle");
    }
}
