//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors reported by the quiz engine and the browse cursor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error("catalog has no items")]
    EmptyCatalog,

    #[error("cannot {operation} while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },

    #[error("malformed item at index {index}: {reason}")]
    MalformedItem { index: usize, reason: String },

    #[error("position {position} is out of range for {len} items")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("field without a title at line {line}")]
    MissingTitle { line: usize },

    #[error("empty title at line {line}")]
    EmptyTitle { line: usize },

    #[error("duplicate {field} field at line {line}")]
    DuplicateField { field: &'static str, line: usize },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Malformed(#[from] QuizError),
}
