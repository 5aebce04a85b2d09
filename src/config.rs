//! Configuration for the stopword pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StopwordError};

/// Configuration for a [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory holding installed stop-word corpora.
    pub corpus_dir: PathBuf,

    /// Language directory file. `None` uses the bundled directory.
    pub language_directory: Option<PathBuf>,

    /// Extension given to derived output paths.
    pub output_extension: String,

    /// Treat language guesses the detector marks unreliable as failures.
    pub require_reliable: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            language_directory: None,
            output_extension: "txt".to_string(),
            require_reliable: false,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            StopwordError::config(format!("Cannot read config {}: {e}", path.display()))
        })?;
        let config: PipelineConfig = serde_json::from_str(&json).map_err(|e| {
            StopwordError::config(format!("Malformed config {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        let extension = self.output_extension.trim();
        if extension.is_empty() || extension.contains(['.', '/', '\\']) {
            return Err(StopwordError::config(format!(
                "Invalid output extension '{}'",
                self.output_extension
            )));
        }
        Ok(())
    }
}

/// `<data dir>/stopword-removal/stopwords`, or `./stopword_data/stopwords`
/// when the platform has no data directory.
pub fn default_corpus_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("stopword-removal"))
        .unwrap_or_else(|| PathBuf::from("stopword_data"))
        .join("stopwords")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.output_extension, "txt");
        assert!(config.language_directory.is_none());
        assert!(!config.require_reliable);
        assert!(config.corpus_dir.ends_with("stopwords"));
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"corpus_dir": "/srv/corpora", "require_reliable": true}"#).unwrap();

        let config = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(config.corpus_dir, PathBuf::from("/srv/corpora"));
        assert!(config.require_reliable);
        assert_eq!(config.output_extension, "txt");
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, r#"{"output_extension": ".txt"}"#).unwrap();
        assert!(matches!(
            PipelineConfig::from_file(&path),
            Err(StopwordError::Config(_))
        ));

        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            PipelineConfig::from_file(&path),
            Err(StopwordError::Config(_))
        ));
    }
}
