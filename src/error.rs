//! Error types for stopword removal.
//!
//! Every failure the pipeline can hit is a variant of [`StopwordError`]. The
//! variants mirror the stages of the pipeline so callers can tell a document
//! that could not be read apart from one whose language has no stop-word
//! corpus.
//!
//! # Examples
//!
//! ```
//! use stopword_removal::error::{Result, StopwordError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StopwordError::unknown_language_code("xx"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for stopword removal.
#[derive(Error, Debug)]
pub enum StopwordError {
    /// The input path does not carry a supported document extension.
    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    /// The document could not be read or its text could not be extracted.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// No language could be determined for the text.
    #[error("Language detection failed: {0}")]
    DetectionFailed(String),

    /// The detected code is not in the language directory.
    #[error("Unknown language code: {0}")]
    UnknownLanguageCode(String),

    /// The corpus for a language is not installed locally.
    ///
    /// This is the recoverable case: the provider fetches once and retries.
    #[error("Stop-word corpus for '{0}' is not installed locally")]
    CorpusMissingLocally(String),

    /// No stop-word corpus exists for the language.
    #[error("Detected language: {language}. No stop words available for this language")]
    CorpusUnsupported { language: String },

    /// Writing the output file failed.
    #[error("Failed to write output to {path}: {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output path would overwrite the input document.
    #[error("Output path {0} is the input document")]
    OutputConflict(PathBuf),

    /// Configuration or bundled resources are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors outside of output writing
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with StopwordError.
pub type Result<T> = std::result::Result<T, StopwordError>;

impl StopwordError {
    /// Create a new unsupported document error.
    pub fn unsupported_document<S: Into<String>>(msg: S) -> Self {
        StopwordError::UnsupportedDocument(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        StopwordError::ExtractionFailed(msg.into())
    }

    /// Create a new detection error.
    pub fn detection<S: Into<String>>(msg: S) -> Self {
        StopwordError::DetectionFailed(msg.into())
    }

    /// Create a new unknown language code error.
    pub fn unknown_language_code<S: Into<String>>(code: S) -> Self {
        StopwordError::UnknownLanguageCode(code.into())
    }

    /// Create a new corpus missing error.
    pub fn corpus_missing<S: Into<String>>(language: S) -> Self {
        StopwordError::CorpusMissingLocally(language.into())
    }

    /// Create a new corpus unsupported error.
    pub fn corpus_unsupported<S: Into<String>>(language: S) -> Self {
        StopwordError::CorpusUnsupported {
            language: language.into(),
        }
    }

    /// Create a new output write error.
    pub fn output_write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        StopwordError::OutputWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StopwordError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StopwordError::Other(msg.into())
    }

    /// Short, stable name of the failure kind, used in batch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            StopwordError::UnsupportedDocument(_) => "unsupported-document",
            StopwordError::ExtractionFailed(_) => "extraction-failed",
            StopwordError::DetectionFailed(_) => "detection-failed",
            StopwordError::UnknownLanguageCode(_) => "unknown-language-code",
            StopwordError::CorpusMissingLocally(_) => "corpus-missing-locally",
            StopwordError::CorpusUnsupported { .. } => "corpus-unsupported",
            StopwordError::OutputWriteFailed { .. } => "output-write-failed",
            StopwordError::OutputConflict(_) => "output-conflict",
            StopwordError::Config(_) => "config",
            StopwordError::Io(_) => "io",
            StopwordError::Json(_) => "json",
            StopwordError::Other(_) => "other",
        }
    }

    /// Whether the error can be recovered from by fetching corpus data.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StopwordError::CorpusMissingLocally(_))
    }
}
