//! Error types for datebook.

use thiserror::Error;

/// Errors that can occur while parsing or executing a datebook command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatebookError {
    #[error("Wrong date format: {input}")]
    DateFormat { input: String },

    #[error("Month value is invalid: {0}")]
    InvalidMonth(i32),

    #[error("Day value is invalid: {0}")]
    InvalidDay(i32),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl DatebookError {
    pub fn date_format(input: impl Into<String>) -> Self {
        Self::DateFormat {
            input: input.into(),
        }
    }

    /// The date text did not match `YEAR-MONTH-DAY`.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::DateFormat { .. })
    }

    /// A month or day was well-formed but out of range.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::InvalidMonth(_) | Self::InvalidDay(_))
    }
}

/// Result type alias for datebook operations.
pub type DatebookResult<T> = Result<T, DatebookError>;
