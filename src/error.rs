//! Error types for the Falx library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`FalxError`] enum. Retrieval itself is deliberately "best effort,
//! never throws": unknown terms and malformed queries resolve to empty
//! or fallback sets instead of errors, so the variants here cover the
//! surrounding machinery (invalid tokenizer patterns, file ingestion,
//! output serialization) rather than query evaluation.
//!
//! # Examples
//!
//! ```
//! use falx::error::{FalxError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FalxError::query("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Falx operations.
#[derive(Error, Debug)]
pub enum FalxError {
    /// I/O errors (document ingestion, CLI file reads)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FalxError.
pub type Result<T> = std::result::Result<T, FalxError>;

impl FalxError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        FalxError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FalxError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        FalxError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FalxError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FalxError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FalxError::index("Test index error");
        assert_eq!(error.to_string(), "Index error: Test index error");

        let error = FalxError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = FalxError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let falx_error = FalxError::from(io_error);

        match falx_error {
            FalxError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
