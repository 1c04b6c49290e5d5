/// Core error types for Skill Swap
use thiserror::Error;

/// Result type alias using `SwapError`
pub type Result<T> = std::result::Result<T, SwapError>;

/// Core error type for Skill Swap
#[derive(Error, Debug)]
pub enum SwapError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SwapError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
