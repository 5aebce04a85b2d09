//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of analysis: they split input text into
//! tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//! - [`word_punct::WordPunctTokenizer`] - Word runs and single punctuation marks
//!
//! # Examples
//!
//! ```
//! use stopword_removal::analysis::tokenizer::Tokenizer;
//! use stopword_removal::analysis::tokenizer::word_punct::WordPunctTokenizer;
//!
//! let tokenizer = WordPunctTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared across
/// pipeline runs.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod word_punct;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use word_punct::WordPunctTokenizer;
