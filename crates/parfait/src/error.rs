//! Error types for parfait operations.

use thiserror::Error;

/// The error type for parfait operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The menu file could not be read or parsed.
    #[error("menu error: {0}")]
    EdgeList(#[from] parfait_edgelist::Error),

    /// JSON serialization of a report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for parfait operations.
pub type Result<T> = std::result::Result<T, Error>;
