//! # stopword-removal
//!
//! Language-aware stopword removal for documents.
//!
//! ## Features
//!
//! - Text extraction from PDF and plain-text documents
//! - Language detection mapped through a code-to-name directory
//! - Word/punctuation tokenization
//! - Per-language stop-word corpora, installed on first use
//! - Batch runs over a directory with verification of the outputs

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod language;
pub mod output;
pub mod pipeline;

pub mod prelude {
    pub use crate::config::PipelineConfig;
    pub use crate::error::{Result, StopwordError};
    pub use crate::language::{LanguageCode, LanguageName};
    pub use crate::pipeline::{Pipeline, ProcessOutcome};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
