//! Text analysis: tokenization and token filtering.
//!
//! Tokenizers turn document text into a [`TokenStream`]; filters transform one
//! stream into another. The stopword pipeline uses a [`WordPunctTokenizer`]
//! followed by a [`StopFilter`].

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::{IntoTokenStream, Token, TokenStream, join_tokens};
pub use token_filter::{Filter, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, WordPunctTokenizer};
