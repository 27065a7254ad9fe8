//! Error types for the synonymous library.
//!
//! All fallible operations return [`SynonymError`] through the crate-wide
//! [`Result`] alias. Validation failures are deterministic: an operation that
//! fails leaves the store exactly as it found it.
//!
//! # Examples
//!
//! ```
//! use synonymous::error::{ErrorKind, SynonymError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynonymError::invalid_word("Word cannot be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidWord),
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for synonymous operations.
#[derive(Error, Debug)]
pub enum SynonymError {
    /// A word was absent, or empty after trimming whitespace.
    #[error("Invalid word: {0}")]
    InvalidWord(String),

    /// The operation touched a blacklisted word.
    #[error("Blacklisted word: {0}")]
    BlacklistedWord(String),

    /// Both sides of a removal were the same word.
    #[error("Same word: {0}")]
    SameWord(String),

    /// The enumerator was given no candidate sets, or an empty one.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// The caller's role does not permit the operation.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// I/O errors (reading configuration or synonym files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// An error with context attached at an application boundary
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SynonymError.
pub type Result<T> = std::result::Result<T, SynonymError>;

/// Coarse classification of a [`SynonymError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidWord,
    BlacklistedWord,
    SameWord,
    EmptyInput,
    AccessDenied,
    Io,
    Config,
    Other,
}

impl SynonymError {
    /// Create a new invalid word error.
    pub fn invalid_word<S: Into<String>>(msg: S) -> Self {
        SynonymError::InvalidWord(msg.into())
    }

    /// Create a new blacklisted word error for `word`.
    pub fn blacklisted<S: Into<String>>(word: S) -> Self {
        SynonymError::BlacklistedWord(word.into())
    }

    /// Create a new same word error.
    pub fn same_word<S: Into<String>>(word: S) -> Self {
        SynonymError::SameWord(word.into())
    }

    /// Create a new empty input error.
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        SynonymError::EmptyInput(msg.into())
    }

    /// Create a new access denied error.
    pub fn access_denied<S: Into<String>>(msg: S) -> Self {
        SynonymError::AccessDenied(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SynonymError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SynonymError::Other(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SynonymError::InvalidWord(_) => ErrorKind::InvalidWord,
            SynonymError::BlacklistedWord(_) => ErrorKind::BlacklistedWord,
            SynonymError::SameWord(_) => ErrorKind::SameWord,
            SynonymError::EmptyInput(_) => ErrorKind::EmptyInput,
            SynonymError::AccessDenied(_) => ErrorKind::AccessDenied,
            SynonymError::Io(_) => ErrorKind::Io,
            SynonymError::Json(_) | SynonymError::Config(_) => ErrorKind::Config,
            SynonymError::Other(_) => ErrorKind::Other,
            SynonymError::Anyhow(e) => e
                .downcast_ref::<SynonymError>()
                .map_or(ErrorKind::Other, SynonymError::kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SynonymError::invalid_word("Word cannot be empty");
        assert_eq!(error.to_string(), "Invalid word: Word cannot be empty");

        let error = SynonymError::blacklisted("earth");
        assert_eq!(error.to_string(), "Blacklisted word: earth");

        let error = SynonymError::access_denied("Only admins can blacklist words");
        assert_eq!(
            error.to_string(),
            "Access denied: Only admins can blacklist words"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(SynonymError::same_word("a").kind(), ErrorKind::SameWord);
        assert_eq!(SynonymError::empty_input("x").kind(), ErrorKind::EmptyInput);
        assert_eq!(SynonymError::config("bad").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_context_keeps_kind() {
        use anyhow::Context;

        let result: Result<()> = Err(SynonymError::config("missing field"));
        let error = SynonymError::from(result.context("Failed to load config.json").unwrap_err());

        assert_eq!(error.kind(), ErrorKind::Config);
        assert_eq!(
            error.to_string(),
            "Failed to load config.json: Configuration error: missing field"
        );

        let error = SynonymError::from(anyhow::anyhow!("unexpected"));
        assert_eq!(error.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SynonymError::from(io_error);

        match error {
            SynonymError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
