//! Domain error types

use crate::screen::state::ScreenState;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot {action} while on the {from} screen")]
    InvalidTransition {
        from: ScreenState,
        action: &'static str,
    },

    #[error("Answer {index} is not an option for question {question}")]
    InvalidAnswer { question: u8, index: usize },

    #[error("Selection is incomplete: {0} categories unanswered")]
    IncompleteSelection(usize),
}

/// Errors raised while reading model output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Response was empty")]
    Empty,

    #[error("Response was not a JSON array")]
    NotAnArray,

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            from: ScreenState::Landing,
            action: "answer",
        };
        assert_eq!(error.to_string(), "Cannot answer while on the Landing screen");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let parse: ParseError = err.into();
        assert!(parse.to_string().starts_with("Invalid JSON"));
    }
}
