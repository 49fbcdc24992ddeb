//! Error types for Shelf core operations.
//!
//! The inventory store swallows most failures itself (a missing or corrupt
//! data file is an empty inventory, not a crash), so this hierarchy is
//! small: errors exist to be logged, not to reach the user.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Data file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data file contents could not be decoded
    #[error("Malformed data file: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Malformed(err.to_string())
    }
}
