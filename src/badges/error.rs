//! Error types for badge operations.

use thiserror::Error;

/// Error type for badge operations.
#[derive(Error, Debug)]
pub enum BadgeError {
    /// No badge with this id in the catalog.
    #[error("Badge not found: {0}")]
    NotFound(String),

    /// The user has not earned this badge.
    #[error("Badge not earned: {0}")]
    NotEarned(String),

    /// The recipient email cannot be hashed into an identity.
    #[error("Invalid recipient email: {0}")]
    InvalidEmail(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for badge operations.
pub type Result<T> = std::result::Result<T, BadgeError>;
