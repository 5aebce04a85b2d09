//! Word/punctuation tokenizer.
//!
//! Splits text into runs of word characters and single punctuation marks.
//! Whitespace separates tokens and is never emitted. The transform is lossy:
//! joining the tokens with single spaces does not restore the original
//! spacing, but tokenizing that space-joined text again yields the same
//! sequence.

use super::Tokenizer;
use super::regex::RegexTokenizer;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Word characters form one token; any other non-whitespace char stands alone.
const WORD_PUNCT_PATTERN: &str = r"\w+|[^\w\s]";

/// Tokenizer producing word and punctuation tokens.
///
/// # Examples
///
/// ```
/// use stopword_removal::analysis::tokenizer::Tokenizer;
/// use stopword_removal::analysis::tokenizer::word_punct::WordPunctTokenizer;
///
/// let tokenizer = WordPunctTokenizer::new();
/// let texts: Vec<String> = tokenizer
///     .tokenize("the cat sat on the mat.")
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(texts, vec!["the", "cat", "sat", "on", "the", "mat", "."]);
/// ```
#[derive(Clone, Debug)]
pub struct WordPunctTokenizer {
    inner: RegexTokenizer,
}

impl WordPunctTokenizer {
    /// Create a new word/punctuation tokenizer.
    pub fn new() -> Self {
        let inner = RegexTokenizer::with_pattern(WORD_PUNCT_PATTERN)
            .expect("Word/punct pattern should be valid");
        WordPunctTokenizer { inner }
    }
}

impl Default for WordPunctTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordPunctTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        self.inner.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "word_punct"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, join_tokens};

    fn texts(text: &str) -> Vec<String> {
        WordPunctTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            texts("the cat sat on the mat."),
            vec!["the", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_punctuation_marks_are_separate() {
        assert_eq!(texts("Wait...what?!"), vec!["Wait", ".", ".", ".", "what", "?", "!"]);
        assert_eq!(texts("don't"), vec!["don", "'", "t"]);
    }

    #[test]
    fn test_whitespace_is_never_a_token() {
        assert!(texts("  \n\t ").is_empty());
        assert!(texts("").is_empty());
        assert_eq!(texts("a\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(texts("Größe über 10€"), vec!["Größe", "über", "10", "€"]);
        assert_eq!(texts("быстро, очень"), vec!["быстро", ",", "очень"]);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "hi, you";
        let tokens: Vec<Token> = WordPunctTokenizer::new().tokenize(text).unwrap().collect();
        for token in &tokens {
            assert_eq!(&text[token.span.clone()], token.text);
        }
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_retokenizing_joined_output_is_stable() {
        let tokenizer = WordPunctTokenizer::new();
        let first: Vec<Token> = tokenizer.tokenize("Hello,   world!\n(again)").unwrap().collect();
        let joined = join_tokens(&first);
        let second: Vec<Token> = tokenizer.tokenize(&joined).unwrap().collect();

        let a: Vec<&str> = first.iter().map(|t| t.text.as_str()).collect();
        let b: Vec<&str> = second.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(a, b);
        assert_eq!(joined, "Hello , world ! ( again )");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordPunctTokenizer::new().name(), "word_punct");
    }
}
