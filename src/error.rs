//! Unified error types for chatlens.
//!
//! The transcript parser and the statistics engine never fail on data-quality
//! problems: malformed lines are skipped and empty input yields an empty
//! result. [`ChatlensError`] therefore only covers the edges of the pipeline,
//! where bytes are read from disk, decoded and written back out.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist or can't be read
    /// - The output file can't be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The input doesn't have the expected structure.
    ///
    /// Raised for unknown report formats or a conversation record that
    /// can't be recognised. Never raised for individual transcript lines.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            path: None,
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a UTF-8 error for a transcript read from `path`.
    pub fn transcript_encoding(source: std::string::FromUtf8Error, path: Option<PathBuf>) -> Self {
        ChatlensError::Utf8 {
            context: "transcript".to_string(),
            path,
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatlensError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}
