// crates/board-core/src/error.rs
// Standardized error types for ProjectBoard

use thiserror::Error;

use crate::validation::Rule;

/// Main error type for the board
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("invalid {field}: {rule}")]
    Validation { field: String, rule: Rule },

    #[error("drag payload is empty")]
    EmptyPayload,

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser API error: {0}")]
    Dom(String),

    #[error("element not found: #{0}")]
    MissingElement(String),
}

/// Convenience type alias for Result using BoardError
pub type Result<T> = std::result::Result<T, BoardError>;

impl BoardError {
    /// True for failures caused by what the user typed, as opposed to the host page
    pub fn is_user_error(&self) -> bool {
        matches!(self, BoardError::Validation { .. })
    }
}
