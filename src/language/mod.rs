//! Language identification.
//!
//! A [`LanguageDetector`] guesses a two-letter [`LanguageCode`] for a text, the
//! [`LanguageDirectory`] maps that code to a canonical [`LanguageName`], and the
//! [`LanguageResolver`] composes the two.

pub mod detector;
pub mod directory;
pub mod resolver;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use detector::{LanguageDetector, WhatlangDetector};
pub use directory::LanguageDirectory;
pub use resolver::LanguageResolver;

/// A two-letter language identifier in the style of ISO 639-1.
///
/// Codes are stored trimmed and lowercased. Nothing beyond membership in a
/// [`LanguageDirectory`] is validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new<S: AsRef<str>>(code: S) -> Self {
        LanguageCode(code.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        LanguageCode::new(code)
    }
}

/// Canonical lowercase language name such as `"english"`.
///
/// This is the key stop-word corpora are stored under. A name can be present in
/// the directory and still have no corpus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageName(String);

impl LanguageName {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        LanguageName(name.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageName {
    fn from(name: &str) -> Self {
        LanguageName::new(name)
    }
}
