//! Error types for the Quiver library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`QuiverError`] enum. Only one condition is fatal to index construction:
//! a document or noise-word source that cannot be read, reported as
//! [`QuiverError::SourceUnavailable`].
//!
//! Rejected tokens and empty searches are *not* errors. The normalizer
//! returns `None` for a token that is not a keyword, and search returns
//! `None` when no document matches.
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use quiver::error::{QuiverError, Result};
//!
//! fn open_list() -> Result<()> {
//!     Err(QuiverError::source_unavailable(
//!         "docs.txt",
//!         io::Error::from(io::ErrorKind::NotFound),
//!     ))
//! }
//!
//! assert!(open_list().unwrap_err().is_source_unavailable());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Quiver operations.
#[derive(Error, Debug)]
pub enum QuiverError {
    /// A document, document list, or noise-word list could not be located or read.
    #[error("Source unavailable: {name}: {source}")]
    SourceUnavailable {
        /// Name of the source as the caller referred to it.
        name: String,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// I/O errors outside of source loading (CLI output and the like)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (invalid tokenizer or filter setup)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with QuiverError.
pub type Result<T> = std::result::Result<T, QuiverError>;

impl QuiverError {
    /// Create a new source-unavailable error.
    pub fn source_unavailable<S: Into<String>>(name: S, source: io::Error) -> Self {
        QuiverError::SourceUnavailable {
            name: name.into(),
            source,
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        QuiverError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        QuiverError::Config(msg.into())
    }

    /// Whether this error means a source could not be read.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, QuiverError::SourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_display() {
        let error =
            QuiverError::source_unavailable("doc1.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(error.is_source_unavailable());
        assert!(error.to_string().starts_with("Source unavailable: doc1.txt"));
    }

    #[test]
    fn test_error_constructors() {
        let error = QuiverError::config("max_results must be positive");
        assert_eq!(
            error.to_string(),
            "Config error: max_results must be positive"
        );
        assert!(!error.is_source_unavailable());

        let error = QuiverError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_io_conversion() {
        let error: QuiverError = io::Error::other("disk full").into();
        assert!(matches!(error, QuiverError::Io(_)));
    }
}
