//! The stopword removal pipeline.
//!
//! [`Pipeline::process`] runs one document end to end:
//!
//! ```text
//! extension check → extract → detect → resolve → tokenize → stop words → filter → write
//! ```
//!
//! Every step before the write is free of side effects apart from logging and
//! the corpus fetch inside the [`StopWordProvider`]. Any failure aborts the
//! document before the output file is touched.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use stopword_removal::config::PipelineConfig;
//! use stopword_removal::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
//! let outcome = pipeline.process(Path::new("report.pdf"), None).unwrap();
//! println!("{} → {}", outcome.language, outcome.output.display());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::analysis::token::{Token, join_tokens};
use crate::analysis::token_filter::{Filter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WordPunctTokenizer};
use crate::config::PipelineConfig;
use crate::corpus::{CorpusStore, DirectoryCorpusStore, StopWordProvider, StopWordSet};
use crate::document::{DocumentExtractor, DocumentKind, FileExtractor};
use crate::error::{Result, StopwordError};
use crate::language::{
    LanguageCode, LanguageDetector, LanguageDirectory, LanguageName, LanguageResolver,
    WhatlangDetector,
};
use crate::output::{OutputSink, default_output_path};

/// Text with the stop words of its language removed.
#[derive(Clone, Debug)]
pub struct FilteredText {
    /// Detected language code.
    pub code: LanguageCode,
    /// Resolved language name.
    pub language: LanguageName,
    /// Surviving tokens in their original order.
    pub tokens: Vec<Token>,
    /// Number of tokens before filtering.
    pub total_tokens: usize,
}

impl FilteredText {
    /// Space-joined surviving tokens.
    pub fn text(&self) -> String {
        join_tokens(&self.tokens)
    }

    pub fn removed_tokens(&self) -> usize {
        self.total_tokens - self.tokens.len()
    }
}

/// Summary of a successfully processed document.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub code: LanguageCode,
    pub language: LanguageName,
    pub total_tokens: usize,
    pub kept_tokens: usize,
    pub removed_tokens: usize,
}

/// Builder for [`Pipeline`], used to swap in other collaborators.
pub struct PipelineBuilder {
    config: PipelineConfig,
    directory: Option<Arc<LanguageDirectory>>,
    detector: Option<Arc<dyn LanguageDetector>>,
    extractor: Option<Arc<dyn DocumentExtractor>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    store: Option<Arc<dyn CorpusStore>>,
}

impl PipelineBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        PipelineBuilder {
            config,
            directory: None,
            detector: None,
            extractor: None,
            tokenizer: None,
            store: None,
        }
    }

    pub fn directory(mut self, directory: Arc<LanguageDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn extractor(mut self, extractor: Arc<dyn DocumentExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn store(mut self, store: Arc<dyn CorpusStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the pipeline, loading the language directory if none was given.
    pub fn build(self) -> Result<Pipeline> {
        self.config.validate()?;

        let directory = match self.directory {
            Some(directory) => directory,
            None => Arc::new(LanguageDirectory::load(
                self.config.language_directory.as_deref(),
            )?),
        };
        let detector: Arc<dyn LanguageDetector> = match self.detector {
            Some(detector) => detector,
            None => Arc::new(WhatlangDetector::new().require_reliable(self.config.require_reliable)),
        };
        let extractor: Arc<dyn DocumentExtractor> = match self.extractor {
            Some(extractor) => extractor,
            None => Arc::new(FileExtractor::new()),
        };
        let tokenizer: Arc<dyn Tokenizer> = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Arc::new(WordPunctTokenizer::new()),
        };
        let store: Arc<dyn CorpusStore> = match self.store {
            Some(store) => store,
            None => Arc::new(DirectoryCorpusStore::new(self.config.corpus_dir.clone())),
        };

        Ok(Pipeline {
            resolver: LanguageResolver::new(directory, detector),
            extractor,
            tokenizer,
            provider: StopWordProvider::new(store),
            sink: OutputSink::new(),
            config: self.config,
        })
    }
}

/// Language-aware stopword removal for documents.
///
/// A pipeline is reusable across documents. The language directory and the
/// stop-word cache are shared between runs; everything else is local to one
/// [`process`](Self::process) call.
pub struct Pipeline {
    config: PipelineConfig,
    resolver: LanguageResolver,
    extractor: Arc<dyn DocumentExtractor>,
    tokenizer: Arc<dyn Tokenizer>,
    provider: StopWordProvider,
    sink: OutputSink,
}

impl Pipeline {
    /// Create a pipeline with the default collaborators.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        PipelineBuilder::new(config).build()
    }

    pub fn builder(config: PipelineConfig) -> PipelineBuilder {
        PipelineBuilder::new(config)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn resolver(&self) -> &LanguageResolver {
        &self.resolver
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Stop words for a language, through the shared corpus cache.
    pub fn stopwords(&self, language: &LanguageName) -> Result<StopWordSet> {
        self.provider.stopwords(language)
    }

    /// Where output for `input` goes when no explicit path is given.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        default_output_path(input, &self.config.output_extension)
    }

    /// Detect the language of `text` and remove its stop words.
    pub fn remove_stopwords(&self, text: &str) -> Result<FilteredText> {
        let (code, language) = self.resolver.detect_and_resolve(text)?;

        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();
        let total_tokens = tokens.len();
        debug!("Tokenized into {total_tokens} tokens");

        let stop_words = self.provider.stopwords(&language)?;
        let filter = StopFilter::for_set(&stop_words);
        let tokens: Vec<Token> = filter.filter(Box::new(tokens.into_iter()))?.collect();
        debug!(
            "Removed {} stop words for {language}",
            total_tokens - tokens.len()
        );

        Ok(FilteredText {
            code,
            language,
            tokens,
            total_tokens,
        })
    }

    /// Process the document at `input`, writing to `output` or the derived
    /// default path.
    pub fn process(&self, input: &Path, output: Option<&Path>) -> Result<ProcessOutcome> {
        let kind = DocumentKind::require(input)?;
        let output = match output {
            Some(output) => output.to_path_buf(),
            None => self.output_path_for(input),
        };
        if same_file(input, &output) {
            return Err(StopwordError::OutputConflict(output));
        }

        let text = self.extractor.extract(input, kind)?;
        let filtered = self.remove_stopwords(&text)?;

        self.sink.write(&output, &filtered.text())?;
        info!(
            "Removed stop words from {} ({}) into {}",
            input.display(),
            filtered.language,
            output.display()
        );

        Ok(ProcessOutcome {
            input: input.to_path_buf(),
            output,
            kept_tokens: filtered.tokens.len(),
            removed_tokens: filtered.removed_tokens(),
            total_tokens: filtered.total_tokens,
            code: filtered.code,
            language: filtered.language,
        })
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .field("tokenizer", &self.tokenizer.name())
            .field("provider", &self.provider)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct FixedDetector(&'static str);

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> Result<LanguageCode> {
            Ok(LanguageCode::new(self.0))
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn pipeline(corpus_dir: &Path, code: &'static str) -> Pipeline {
        let config = PipelineConfig {
            corpus_dir: corpus_dir.to_path_buf(),
            ..PipelineConfig::default()
        };
        Pipeline::builder(config)
            .detector(Arc::new(FixedDetector(code)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_remove_stopwords_scenario() {
        let dir = tempdir().unwrap();
        let pipeline = pipeline(dir.path(), "en");

        let filtered = pipeline.remove_stopwords("the cat sat on the mat.").unwrap();

        assert_eq!(filtered.code.as_str(), "en");
        assert_eq!(filtered.language.as_str(), "english");
        assert_eq!(filtered.text(), "cat sat mat .");
        assert_eq!(filtered.total_tokens, 7);
        assert_eq!(filtered.removed_tokens(), 3);
    }

    #[test]
    fn test_unsupported_extension_is_checked_first() {
        let dir = tempdir().unwrap();
        let pipeline = pipeline(dir.path(), "en");

        let result = pipeline.process(&dir.path().join("missing.docx"), None);
        assert!(matches!(result, Err(StopwordError::UnsupportedDocument(_))));
    }

    #[test]
    fn test_output_may_not_overwrite_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "the cat").unwrap();
        let pipeline = pipeline(&dir.path().join("corpora"), "en");

        assert!(matches!(
            pipeline.process(&input, None),
            Err(StopwordError::OutputConflict(_))
        ));
        assert_eq!(fs::read_to_string(&input).unwrap(), "the cat");
    }

    #[test]
    fn test_process_writes_derived_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("notes.md");
        fs::write(&input, "the cat sat on the mat.").unwrap();
        let pipeline = pipeline(&dir.path().join("corpora"), "en");

        let outcome = pipeline.process(&input, None).unwrap();

        assert_eq!(outcome.output, dir.path().join("notes.txt"));
        assert_eq!(outcome.kept_tokens, 4);
        assert_eq!(outcome.removed_tokens, 3);
        assert_eq!(
            fs::read_to_string(&outcome.output).unwrap(),
            "cat sat mat ."
        );
    }
}
