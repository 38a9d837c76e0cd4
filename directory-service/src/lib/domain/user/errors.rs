use thiserror::Error;

use crate::paging::errors::PageRequestError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all directory operations
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(#[from] PageRequestError),

    // Domain-level errors
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Covers both unknown email and wrong password; callers cannot tell
    /// which one occurred.
    #[error("Invalid credentials")]
    AuthenticationFailed,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for DirectoryError {
    fn from(err: anyhow::Error) -> Self {
        DirectoryError::Internal(err.to_string())
    }
}
