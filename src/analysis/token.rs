//! Token types for text analysis.
//!
//! A [`Token`] is one word or punctuation mark cut from a document. Tokens flow
//! through the pipeline as a [`TokenStream`], a boxed iterator, and are joined
//! back into text with [`join_tokens`].
//!
//! # Examples
//!
//! ```
//! use stopword_removal::analysis::token::Token;
//!
//! let text = "hello world";
//! let token = Token::new(&text[6..11], 1, 6..11);
//! assert_eq!(&text[token.span.clone()], token.text);
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A single unit of text produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    /// Index in the tokenizer's output, counted before any filtering.
    pub position: usize,

    /// Byte range of the token in the source text.
    pub span: Range<usize>,

    /// Set by a filter that keeps stop words in the stream instead of
    /// dropping them.
    pub stop_word: bool,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            position,
            span,
            stop_word: false,
        }
    }

    /// A token whose span covers its own text, for tokens built by hand.
    pub fn detached<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let span = 0..text.len();
        Token::new(text, position, span)
    }

    pub fn mark_stop_word(mut self) -> Self {
        self.stop_word = true;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A lazily evaluated sequence of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    fn into_token_stream(self) -> TokenStream;
}

impl<I> IntoTokenStream for I
where
    I: IntoIterator<Item = Token>,
    I::IntoIter: 'static,
{
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Join token texts with single spaces.
///
/// Original spacing is not preserved: `"mat."` tokenizes to `["mat", "."]` and
/// joins back as `"mat ."`.
pub fn join_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_span() {
        let token = Token::detached("größe", 3);
        assert_eq!(token.span, 0..7);
        assert_eq!(token.position, 3);
        assert!(!token.stop_word);
        assert!(token.mark_stop_word().stop_word);
    }

    #[test]
    fn test_vec_into_stream() {
        let stream = vec![Token::detached("a", 0), Token::detached("b", 1)].into_token_stream();
        let texts: Vec<String> = stream.map(|t| t.to_string()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec![
            Token::detached("cat", 0),
            Token::detached("mat", 1),
            Token::detached(".", 2),
        ];
        assert_eq!(join_tokens(&tokens), "cat mat .");
        assert_eq!(join_tokens(&Vec::<Token>::new()), "");
    }
}
