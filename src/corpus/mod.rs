//! Stop-word corpora.
//!
//! Stop words come from a [`CorpusStore`]. A store distinguishes a corpus that
//! is merely not installed yet ([`CorpusLookup::Missing`], recoverable by a
//! fetch) from a language no corpus covers ([`CorpusLookup::Unsupported`],
//! final). [`StopWordProvider`] drives the lookup, fetch and single retry and
//! caches the outcome per language.

pub mod provider;
pub mod source;
pub mod store;

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::language::LanguageName;

pub use provider::StopWordProvider;
pub use source::{BundledCorpus, CorpusSource};
pub use store::DirectoryCorpusStore;

/// Outcome of asking a store for a language's stop words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorpusLookup {
    /// The corpus is installed; these are its words.
    Found(Vec<String>),
    /// The language is covered but its data is not installed locally.
    Missing,
    /// No corpus exists for the language.
    Unsupported,
}

/// Local storage of stop-word corpora.
pub trait CorpusStore: Send + Sync {
    /// Look up the installed corpus for `language`.
    fn lookup(&self, language: &LanguageName) -> Result<CorpusLookup>;

    /// Retrieve and install the corpus data for `language`.
    fn fetch(&self, language: &LanguageName) -> Result<()>;

    /// Get the name of this store (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The stop words of one language.
///
/// Cloning shares the underlying set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopWordSet {
    language: LanguageName,
    words: Arc<HashSet<String>>,
}

impl StopWordSet {
    pub fn new<I, S>(language: LanguageName, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWordSet {
            language,
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    pub fn language(&self) -> &LanguageName {
        &self.language
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn shared_words(&self) -> Arc<HashSet<String>> {
        Arc::clone(&self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_word_set() {
        let set = StopWordSet::new(LanguageName::new("english"), ["the", "on", "the"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(!set.contains("The"));
        assert_eq!(set.language().as_str(), "english");
    }

    #[test]
    fn test_clones_share_words() {
        let set = StopWordSet::new(LanguageName::new("english"), ["a"]);
        let clone = set.clone();
        assert!(Arc::ptr_eq(&set.shared_words(), &clone.shared_words()));
    }
}
