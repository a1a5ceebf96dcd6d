//! Chat Relay Port - how the conversation controller reaches the relay endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chat::Turn;

/// Port for sending a conversation to the relay and getting one reply back.
#[async_trait]
pub trait ChatRelay: Send + Sync {
    /// Sends the full history and returns the assistant's reply text.
    async fn send(&self, turns: Vec<Turn>) -> Result<String, RelayError>;
}

/// Failure of one relay call as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The endpoint answered with an error body or non-success status.
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        is_config_error: bool,
    },

    /// The endpoint could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered success with an unreadable body.
    #[error("invalid relay response: {0}")]
    Decode(String),
}

impl RelayError {
    pub fn rejected(status: u16, message: impl Into<String>, is_config_error: bool) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
            is_config_error,
        }
    }

    /// True when the endpoint flagged the failure as a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RelayError::Rejected {
                is_config_error: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_endpoint_message() {
        let err = RelayError::rejected(429, "Rate limit exceeded. Please try again in a moment.", false);
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded. Please try again in a moment."
        );
        assert!(!err.is_config_error());
    }

    #[test]
    fn config_flag_only_on_rejections() {
        assert!(RelayError::rejected(500, "x", true).is_config_error());
        assert!(!RelayError::Transport("refused".to_string()).is_config_error());
        assert!(!RelayError::Decode("eof".to_string()).is_config_error());
    }
}
