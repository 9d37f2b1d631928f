//! Planner error types
//!
//! The ledgers themselves never fail. These errors only come from turning
//! user-supplied strings into typed values.

use thiserror::Error;

/// Errors that can occur while parsing planner values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown RSVP status
    #[error("Unknown guest status: {0}")]
    GuestStatus(String),

    /// Unknown task priority
    #[error("Unknown task priority: {0}")]
    Priority(String),

    /// Malformed calendar date
    #[error("Invalid date: {0}")]
    Date(String),
}

/// Result type alias for planner parsing
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::GuestStatus("maybe".to_string());
        assert_eq!(err.to_string(), "Unknown guest status: maybe");

        let err = ParseError::Priority("urgent".to_string());
        assert_eq!(err.to_string(), "Unknown task priority: urgent");
    }
}
