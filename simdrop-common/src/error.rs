//! Common error types for switch classification

use thiserror::Error;

/// Common result type for simdrop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across simdrop
#[derive(Error, Debug)]
pub enum Error {
    /// Fluency list and similarity sequence are not index-aligned
    #[error("Length mismatch: fluency list has {fluency} items, semantic similarity has {similarity}")]
    LengthMismatch { fluency: usize, similarity: usize },

    /// Fluency list has no items
    #[error("Empty input: fluency list must contain at least one item")]
    EmptyInput,

    /// NaN similarity rejected by the configured NaN policy
    #[error("Unordered similarity value (NaN) at position {index}")]
    UnorderedSimilarity { index: usize },

    /// Integer code outside the 0/1/2 label range
    #[error("Invalid switch label code: {0}")]
    InvalidLabelCode(u8),

    /// Unrecognized label name
    #[error("Invalid switch label name: {0}")]
    InvalidLabelName(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
