//! Custom error types for albumshelf
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for albumshelf operations
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Storage errors: a collection file is missing, corrupt, or unwritable.
    /// Fatal: there is no recovery path; callers abort the run.
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login rejected: unknown username or wrong password.
    /// Recoverable: the login loop reports and re-prompts.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Sign-up rejected: the username is already taken
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// Non-numeric or out-of-range index, or unrecognized menu choice.
    /// Recoverable: reported, nothing mutated.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A field name outside the {Title, Artist, Year, Genres} set.
    /// Unreachable through the menu; callers of the programmatic contract
    /// treat it as "nothing to do" and leave prior state untouched.
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl ShelfError {
    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for albumshelf operations
pub type ShelfResult<T> = Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShelfError::Storage("albums.json unreadable".into());
        assert_eq!(err.to_string(), "Storage error: albums.json unreadable");
    }

    #[test]
    fn test_duplicate_user_display() {
        let err = ShelfError::DuplicateUser("alice".into());
        assert_eq!(err.to_string(), "User already exists: alice");
    }

    #[test]
    fn test_invalid_input_helper() {
        let err = ShelfError::invalid_input("No album at index 9");
        assert_eq!(err.to_string(), "Invalid input: No album at index 9");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let shelf_err: ShelfError = io_err.into();
        assert!(matches!(shelf_err, ShelfError::Io(_)));
    }
}
