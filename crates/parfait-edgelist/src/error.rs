//! Error types for parfait-edgelist operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for edge-list parsing operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The edge-list file does not exist.
    #[error("edge list not found: {}", .path.display())]
    NotFound {
        /// The path that was opened.
        path: PathBuf,
    },

    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line is not a valid `<source> -> <destination>` record.
    #[error("invalid edge list line {line_number}: {reason}")]
    InvalidLine {
        /// 1-based line number of the offending record.
        line_number: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// A specialized Result type for parfait-edgelist operations.
pub type Result<T> = std::result::Result<T, Error>;
