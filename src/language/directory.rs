//! Two-letter code to language name directory.
//!
//! The directory is read once at startup, either from the copy bundled into
//! the binary or from a JSON file of the same shape:
//!
//! ```json
//! { "en": { "lang_name": "english" }, "fr": { "lang_name": "french" } }
//! ```
//!
//! It is never mutated afterwards and is shared behind an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Result, StopwordError};
use crate::language::{LanguageCode, LanguageName};

const BUNDLED_DIRECTORY: &str = include_str!("../../resources/lang_dir.json");

#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    lang_name: String,
}

/// Immutable mapping from [`LanguageCode`] to [`LanguageName`].
#[derive(Clone, Debug)]
pub struct LanguageDirectory {
    entries: HashMap<LanguageCode, LanguageName>,
}

impl LanguageDirectory {
    /// Load the directory bundled with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DIRECTORY)
    }

    /// Load from a JSON file, or the bundled copy when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Load a directory from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            StopwordError::config(format!(
                "Cannot read language directory {}: {e}",
                path.display()
            ))
        })?;
        debug!("Loading language directory from {}", path.display());
        Self::from_json(&json)
    }

    /// Parse a directory from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, DirectoryEntry> = serde_json::from_str(json)
            .map_err(|e| StopwordError::config(format!("Malformed language directory: {e}")))?;

        if raw.is_empty() {
            return Err(StopwordError::config("Language directory is empty"));
        }

        let mut entries = HashMap::with_capacity(raw.len());
        for (code, entry) in raw {
            let code = LanguageCode::new(&code);
            if code.as_str().chars().count() != 2 {
                return Err(StopwordError::config(format!(
                    "Language directory key '{code}' is not a two-letter code"
                )));
            }
            if entry.lang_name.trim().is_empty() {
                return Err(StopwordError::config(format!(
                    "Language directory entry '{code}' has an empty name"
                )));
            }
            if entries.contains_key(&code) {
                return Err(StopwordError::config(format!(
                    "Language directory lists '{code}' more than once"
                )));
            }
            entries.insert(code, LanguageName::new(&entry.lang_name));
        }

        Ok(LanguageDirectory { entries })
    }

    /// Look up the name for a code. `None` means the code is unknown.
    pub fn get(&self, code: &LanguageCode) -> Option<&LanguageName> {
        self.entries.get(code)
    }

    /// Whether any code maps to `name`.
    pub fn contains_name(&self, name: &LanguageName) -> bool {
        self.entries.values().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
