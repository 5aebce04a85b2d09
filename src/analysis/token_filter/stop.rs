//! Stop filter implementation.
//!
//! Removes tokens whose text is in a stop-word set. Matching is exact and
//! case-sensitive; no stemming or case folding is applied, so `"The"` survives
//! a set that only contains `"the"`.
//!
//! # Examples
//!
//! ```
//! use stopword_removal::analysis::token::{IntoTokenStream, Token};
//! use stopword_removal::analysis::token_filter::Filter;
//! use stopword_removal::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(["the", "on"]);
//! let tokens = vec![
//!     Token::detached("the", 0),
//!     Token::detached("cat", 1),
//!     Token::detached("on", 2),
//! ];
//!
//! let kept: Vec<_> = filter.filter(tokens.into_token_stream()).unwrap().collect();
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "cat");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::corpus::StopWordSet;
use crate::error::Result;

/// Drops (or marks) tokens found in a stop-word set.
///
/// Surviving tokens keep their relative order and their original positions.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
    remove_stopped: bool,
}

impl StopFilter {
    /// Filter sharing the words of a resolved corpus.
    pub fn for_set(set: &StopWordSet) -> Self {
        StopFilter {
            stop_words: set.shared_words(),
            remove_stopped: true,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(Into::into).collect()),
            remove_stopped: true,
        }
    }

    /// With `false`, stop words stay in the stream with
    /// [`stop_word`](crate::analysis::token::Token::stop_word) set.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let remove = self.remove_stopped;

        Ok(Box::new(tokens.filter_map(move |token| {
            match (stop_words.contains(&token.text), remove) {
                (false, _) => Some(token),
                (true, true) => None,
                (true, false) => Some(token.mark_stop_word()),
            }
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
