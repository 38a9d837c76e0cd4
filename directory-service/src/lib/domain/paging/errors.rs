use thiserror::Error;

/// Error for page request validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("Page must be at least 1, got {0}")]
    PageOutOfRange(i64),

    #[error("Limit must be one of 5, 10, or 25, got {0}")]
    UnsupportedLimit(i64),
}
