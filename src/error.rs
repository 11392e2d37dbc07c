//! Error types for summarization.
//!
//! Every failure the pipeline or its file boundary can report has its own
//! variant, so callers can tell "nothing to read" apart from "nothing worth
//! scoring".

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for summarization operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors that can occur while summarizing text.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The supplied text was empty.
    #[error("input text is empty")]
    EmptyInput,

    /// No non-stop word was found, so no sentence can be scored.
    #[error(
        "could not calculate word frequencies (text may contain only stop words or be too short)"
    )]
    NoScorableContent,

    /// Summary ratio was not a number or fell outside `(0.0, 1.0]`.
    #[error("invalid summary ratio: {reason}")]
    InvalidRatio { reason: String },

    /// Input file does not exist.
    #[error("file not found at '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("an error occurred while reading '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummarizeError {
    /// Create a new invalid ratio error.
    #[must_use]
    pub fn invalid_ratio(reason: impl Into<String>) -> Self {
        Self::InvalidRatio {
            reason: reason.into(),
        }
    }

    /// Classify an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}
