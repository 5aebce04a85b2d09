//! Upstream sources of stop-word lists.
//!
//! A [`CorpusSource`] is where a store fetches from. [`BundledCorpus`] serves
//! the NLTK lists compiled into the `stop-words` crate (its `nltk` feature),
//! keyed by the language names used throughout the pipeline.

use stop_words::LANGUAGE;

use crate::language::LanguageName;

/// Names of the languages [`BundledCorpus`] provides.
const BUNDLED_LANGUAGES: &[&str] = &[
    "arabic",
    "danish",
    "dutch",
    "english",
    "finnish",
    "french",
    "german",
    "greek",
    "hungarian",
    "italian",
    "norwegian",
    "portuguese",
    "romanian",
    "russian",
    "spanish",
    "swedish",
    "turkish",
];

/// Where stop-word corpora are retrieved from.
pub trait CorpusSource: Send + Sync {
    /// Whether the source has a corpus for `language` at all.
    fn provides(&self, language: &LanguageName) -> bool;

    /// The words of the corpus, or `None` when the language is not provided.
    fn words(&self, language: &LanguageName) -> Option<Vec<String>>;

    /// Every language this source provides.
    fn languages(&self) -> Vec<LanguageName>;
}

/// Stop-word lists shipped with the `stop-words` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledCorpus;

impl BundledCorpus {
    pub fn new() -> Self {
        BundledCorpus
    }
}

fn bundled_language(language: &LanguageName) -> Option<LANGUAGE> {
    let language = match language.as_str() {
        "arabic" => LANGUAGE::Arabic,
        "danish" => LANGUAGE::Danish,
        "dutch" => LANGUAGE::Dutch,
        "english" => LANGUAGE::English,
        "finnish" => LANGUAGE::Finnish,
        "french" => LANGUAGE::French,
        "german" => LANGUAGE::German,
        "greek" => LANGUAGE::Greek,
        "hungarian" => LANGUAGE::Hungarian,
        "italian" => LANGUAGE::Italian,
        "norwegian" => LANGUAGE::Norwegian,
        "portuguese" => LANGUAGE::Portuguese,
        "romanian" => LANGUAGE::Romanian,
        "russian" => LANGUAGE::Russian,
        "spanish" => LANGUAGE::Spanish,
        "swedish" => LANGUAGE::Swedish,
        "turkish" => LANGUAGE::Turkish,
        _ => return None,
    };
    Some(language)
}

impl CorpusSource for BundledCorpus {
    fn provides(&self, language: &LanguageName) -> bool {
        bundled_language(language).is_some()
    }

    fn words(&self, language: &LanguageName) -> Option<Vec<String>> {
        let language = bundled_language(language)?;
        Some(
            stop_words::get(language)
                .iter()
                .map(|word| word.to_string())
                .collect(),
        )
    }

    fn languages(&self) -> Vec<LanguageName> {
        BUNDLED_LANGUAGES
            .iter()
            .map(|name| LanguageName::new(name))
            .collect()
    }
}
