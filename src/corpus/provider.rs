//! Stop-word resolution with fetch-and-retry recovery.
//!
//! Resolving a language walks a fixed state machine:
//!
//! ```text
//! Lookup ──Found──────────────────────────▶ Resolved
//!   │ ──Unsupported───────────────────────▶ Unavailable
//!   └─Missing─▶ Fetch ─▶ Retry ──Found────▶ Resolved
//!                          └─otherwise────▶ Unavailable
//! ```
//!
//! The retry runs whether or not the fetch reported success, and there is
//! exactly one. Every terminal state is cached for the language, so a language
//! is fetched at most once per provider and an unsupported language never
//! triggers a fetch.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error, info, warn};
use parking_lot::Mutex;

use crate::corpus::{CorpusLookup, CorpusStore, StopWordSet};
use crate::error::{Result, StopwordError};
use crate::language::LanguageName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Lookup,
    Fetch,
    Retry,
}

/// Terminal outcome of resolving one language.
#[derive(Clone, Debug)]
enum Resolution {
    Resolved(StopWordSet),
    Unavailable,
}

impl Resolution {
    fn to_result(&self, language: &LanguageName) -> Result<StopWordSet> {
        match self {
            Resolution::Resolved(set) => Ok(set.clone()),
            Resolution::Unavailable => Err(StopwordError::corpus_unsupported(language.as_str())),
        }
    }
}

/// Resolves and caches stop-word sets per language.
///
/// The cache lock is held while a language is being resolved, so concurrent
/// first requests for the same language share one fetch.
pub struct StopWordProvider {
    store: Arc<dyn CorpusStore>,
    cache: Mutex<HashMap<LanguageName, Resolution>>,
}

impl StopWordProvider {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        StopWordProvider {
            store,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Return the stop words for `language`.
    ///
    /// Fails with [`StopwordError::CorpusUnsupported`] when no corpus exists
    /// for the language or the data is still missing after the fetch. The
    /// verdict sticks for the life of the provider.
    pub fn stopwords(&self, language: &LanguageName) -> Result<StopWordSet> {
        let mut cache = self.cache.lock();
        if let Some(resolution) = cache.get(language) {
            debug!("Using cached stop-word resolution for {language}");
            return resolution.to_result(language);
        }

        let resolution = self.resolve(language)?;
        let result = resolution.to_result(language);
        cache.insert(language.clone(), resolution);
        result
    }

    /// Number of languages with a cached outcome.
    pub fn cached_languages(&self) -> usize {
        self.cache.lock().len()
    }

    fn resolve(&self, language: &LanguageName) -> Result<Resolution> {
        let mut state = State::Lookup;
        loop {
            state = match state {
                State::Lookup => match self.store.lookup(language)? {
                    CorpusLookup::Found(words) => return Ok(self.resolved(language, words)),
                    CorpusLookup::Unsupported => {
                        error!("Stopwords corpus not available for {language}");
                        return Ok(Resolution::Unavailable);
                    }
                    CorpusLookup::Missing => {
                        warn!("Unable to find stop-word data for {language}, fetching");
                        State::Fetch
                    }
                },
                State::Fetch => match self.store.fetch(language) {
                    Ok(()) => State::Retry,
                    Err(StopwordError::CorpusUnsupported { .. }) => {
                        error!("Stopwords corpus not available for {language}");
                        return Ok(Resolution::Unavailable);
                    }
                    Err(e) => {
                        warn!("Fetching stop-word data for {language} failed: {e}");
                        State::Retry
                    }
                },
                State::Retry => match self.store.lookup(language)? {
                    CorpusLookup::Found(words) => return Ok(self.resolved(language, words)),
                    CorpusLookup::Missing | CorpusLookup::Unsupported => {
                        error!("Stop-word data for {language} still missing after fetch");
                        return Ok(Resolution::Unavailable);
                    }
                },
            };
        }
    }

    fn resolved(&self, language: &LanguageName, words: Vec<String>) -> Resolution {
        let set = StopWordSet::new(language.clone(), words);
        info!("Loaded {} stop words for {language}", set.len());
        Resolution::Resolved(set)
    }
}

impl std::fmt::Debug for StopWordProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopWordProvider")
            .field("store", &self.store.name())
            .field("cached_languages", &self.cached_languages())
            .finish()
    }
}
