//! Batch processing and verification of a directory of documents.
//!
//! Every supported document directly inside the input directory is run through
//! the [`Pipeline`] on its own; a failing document is recorded and the batch
//! moves on. Each output is then read back, tokenized again and checked for
//! leftover stop words of the expected language.
//!
//! The expected language comes from the file name when its prefix (the part
//! before the first `-` or `.`) names a language in the directory, as in
//! `french-report.pdf`. Otherwise the language the pipeline detected is used.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::analysis::token_filter::{Filter, StopFilter};
use crate::document::{DocumentExtractor, DocumentKind, FileExtractor};
use crate::error::Result;
use crate::language::{LanguageDirectory, LanguageName};
use crate::output::OutputSink;
use crate::pipeline::{Pipeline, ProcessOutcome};

/// Options for [`run_batch`].
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Where outputs are written. Defaults to `<input dir>/output`.
    pub output_dir: Option<PathBuf>,
    /// Keep the output files after verification.
    pub keep_outputs: bool,
}

/// Why one document did not pass.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    pub document: PathBuf,
    pub kind: String,
    pub message: String,
}

/// Aggregated result of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure<S: Into<String>>(&mut self, document: &Path, kind: S, message: String) {
        error!("{}: {message}", document.display());
        self.failures.push(DocumentFailure {
            document: document.to_path_buf(),
            kind: kind.into(),
            message,
        });
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} documents passed", self.succeeded, self.total)
    }
}

/// Supported documents directly inside `dir`, sorted by path.
pub fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if DocumentKind::from_path(&path).is_some() {
            documents.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }
    documents.sort();
    Ok(documents)
}

/// Language named by the file-name prefix, if the directory knows it.
pub fn expected_language(document: &Path, directory: &LanguageDirectory) -> Option<LanguageName> {
    let file_name = document.file_name()?.to_str()?;
    let prefix = file_name.split(['-', '.']).next()?;
    let name = LanguageName::new(prefix);
    directory.contains_name(&name).then_some(name)
}

/// Stop words of `language` still present in the output file, in output order.
pub fn remaining_stopwords(
    pipeline: &Pipeline,
    output: &Path,
    language: &LanguageName,
) -> Result<Vec<String>> {
    let text = FileExtractor::new().extract(output, DocumentKind::PlainText)?;
    let marker = StopFilter::for_set(&pipeline.stopwords(language)?).remove_stopped(false);
    Ok(marker
        .filter(pipeline.tokenizer().tokenize(&text)?)?
        .filter(|token| token.stop_word)
        .map(|token| token.text)
        .collect())
}

/// Process and verify every supported document in `dir`.
pub fn run_batch(pipeline: &Pipeline, dir: &Path, options: &BatchOptions) -> Result<BatchReport> {
    let documents = collect_documents(dir)?;
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| dir.join("output"));
    let created_output_dir = !output_dir.exists();
    fs::create_dir_all(&output_dir)?;

    let extension = &pipeline.config().output_extension;
    let sink = OutputSink::new();
    let mut report = BatchReport {
        total: documents.len(),
        ..BatchReport::default()
    };
    let mut written = Vec::new();

    for document in &documents {
        info!("Processing {}", document.display());
        let output = output_name(&output_dir, document, extension);

        let outcome = match pipeline.process(document, Some(&output)) {
            Ok(outcome) => outcome,
            Err(e) => {
                report.record_failure(document, e.kind(), e.to_string());
                continue;
            }
        };
        written.push(outcome.output.clone());

        match verify(pipeline, document, &outcome) {
            Ok(()) => report.succeeded += 1,
            Err((kind, message)) => report.record_failure(document, kind, message),
        }
    }

    if !options.keep_outputs {
        for output in &written {
            if let Err(e) = sink.remove(output) {
                warn!("Could not remove {}: {e}", output.display());
            }
        }
        if created_output_dir && let Err(e) = fs::remove_dir(&output_dir) {
            warn!("Could not remove {}: {e}", output_dir.display());
        }
    }

    info!("{report}");
    Ok(report)
}

fn output_name(output_dir: &Path, document: &Path, extension: &str) -> PathBuf {
    let file_name = document
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{file_name}.{extension}"))
}

fn verify(
    pipeline: &Pipeline,
    document: &Path,
    outcome: &ProcessOutcome,
) -> std::result::Result<(), (&'static str, String)> {
    let language = match expected_language(document, pipeline.resolver().directory()) {
        Some(expected) if expected != outcome.language => {
            return Err((
                "language-mismatch",
                format!(
                    "file name says {expected} but {} was detected",
                    outcome.language
                ),
            ));
        }
        Some(expected) => expected,
        None => outcome.language.clone(),
    };

    let remaining = remaining_stopwords(pipeline, &outcome.output, &language)
        .map_err(|e| (e.kind(), e.to_string()))?;
    if remaining.is_empty() {
        debug!("{} verified for {language}", outcome.output.display());
        Ok(())
    } else {
        Err((
            "stopwords-remaining",
            format!(
                "{} {language} stop words remain, first: '{}'",
                remaining.len(),
                remaining[0]
            ),
        ))
    }
}
