//! Custom error types for the notice board

use std::fmt;

/// Main error type for notice board operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeBoardError {
    /// Rejected user input (empty notice text)
    Validation(String),
    /// An operation that needs a selected notice was invoked without one
    Selection(String),
    /// Windowing/platform errors from the UI toolkit
    Ui(String),
}

impl NoticeBoardError {
    /// Posting an empty (or whitespace-only) notice
    pub fn empty_post() -> Self {
        NoticeBoardError::Validation("Notice cannot be empty".to_string())
    }

    /// Updating a notice to empty (or whitespace-only) text
    pub fn empty_update() -> Self {
        NoticeBoardError::Validation("Updated notice cannot be empty".to_string())
    }

    /// Update requested with no notice selected
    pub fn no_selection_for_update() -> Self {
        NoticeBoardError::Selection("Please select a notice to update".to_string())
    }

    /// Delete requested with no notice selected
    pub fn no_selection_for_delete() -> Self {
        NoticeBoardError::Selection("Please select a notice to delete".to_string())
    }

    /// The user-facing message, without the error-kind prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            NoticeBoardError::Validation(msg) => msg,
            NoticeBoardError::Selection(msg) => msg,
            NoticeBoardError::Ui(msg) => msg,
        }
    }
}

impl fmt::Display for NoticeBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeBoardError::Validation(msg) => write!(f, "Validation error: {}", msg),
            NoticeBoardError::Selection(msg) => write!(f, "Selection error: {}", msg),
            NoticeBoardError::Ui(msg) => write!(f, "UI error: {}", msg),
        }
    }
}

impl std::error::Error for NoticeBoardError {}

impl From<slint::PlatformError> for NoticeBoardError {
    fn from(err: slint::PlatformError) -> Self {
        NoticeBoardError::Ui(err.to_string())
    }
}
