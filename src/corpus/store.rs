//! On-disk stop-word corpus.
//!
//! Each installed language is a plain-text file named after the language, one
//! word per line:
//!
//! ```text
//! <corpus_dir>/english
//! <corpus_dir>/french
//! ```
//!
//! Files are installed by [`CorpusStore::fetch`] from a [`CorpusSource`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::corpus::{BundledCorpus, CorpusLookup, CorpusSource, CorpusStore};
use crate::error::{Result, StopwordError};
use crate::language::LanguageName;

/// A corpus store backed by a directory of word lists.
#[derive(Clone)]
pub struct DirectoryCorpusStore {
    root: PathBuf,
    source: Arc<dyn CorpusSource>,
}

impl DirectoryCorpusStore {
    /// Store under `root`, fetching from the bundled corpus.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_source(root, Arc::new(BundledCorpus::new()))
    }

    pub fn with_source<P: Into<PathBuf>>(root: P, source: Arc<dyn CorpusSource>) -> Self {
        DirectoryCorpusStore {
            root: root.into(),
            source,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn corpus_path(&self, language: &LanguageName) -> PathBuf {
        self.root.join(language.as_str())
    }

    fn install(&self, path: &Path, words: &[String]) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let mut file = NamedTempFile::new_in(&self.root)?;
        for word in words {
            writeln!(file, "{word}")?;
        }
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl CorpusStore for DirectoryCorpusStore {
    fn lookup(&self, language: &LanguageName) -> Result<CorpusLookup> {
        if !self.source.provides(language) {
            return Ok(CorpusLookup::Unsupported);
        }

        let path = self.corpus_path(language);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let words: Vec<String> = contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                debug!("Read {} stop words from {}", words.len(), path.display());
                Ok(CorpusLookup::Found(words))
            }
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(CorpusLookup::Missing)
            }
            Err(e) => Err(StopwordError::Io(e)),
        }
    }

    fn fetch(&self, language: &LanguageName) -> Result<()> {
        let words = self
            .source
            .words(language)
            .ok_or_else(|| StopwordError::corpus_unsupported(language.as_str()))?;

        let path = self.corpus_path(language);
        self.install(&path, &words).map_err(|e| {
            warn!("Could not install {}: {e}", path.display());
            StopwordError::corpus_missing(language.as_str())
        })?;

        info!(
            "Installed {} stop words for {language} into {}",
            words.len(),
            path.display()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

impl std::fmt::Debug for DirectoryCorpusStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryCorpusStore")
            .field("root", &self.root)
            .finish()
    }
}
