//! Core error types for torqc-util crate
//!
//! Lexical problems are never errors in this sense: they travel as tokens
//! and diagnostics. The types here cover failures of the surrounding
//! infrastructure, such as reading a source stream.

use thiserror::Error;

/// Error type for loading source text
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed, or produced bytes that are not UTF-8
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for source loading operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
