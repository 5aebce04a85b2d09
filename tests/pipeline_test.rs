use std::fs;
use std::path::Path;
use std::sync::Arc;

use stopword_removal::config::PipelineConfig;
use stopword_removal::document::{DocumentExtractor, DocumentKind};
use stopword_removal::error::{Result, StopwordError};
use stopword_removal::language::{LanguageCode, LanguageDetector};
use stopword_removal::pipeline::Pipeline;
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

/// Returns the same text for every document, whatever its format.
struct CannedExtractor(&'static str);

impl DocumentExtractor for CannedExtractor {
    fn extract(&self, _path: &Path, _kind: DocumentKind) -> Result<String> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

fn pipeline(corpus_dir: &Path, code: &'static str, text: &'static str) -> Pipeline {
    let config = PipelineConfig {
        corpus_dir: corpus_dir.to_path_buf(),
        ..PipelineConfig::default()
    };
    Pipeline::builder(config)
        .detector(Arc::new(FixedDetector(code)))
        .extractor(Arc::new(CannedExtractor(text)))
        .build()
        .unwrap()
}

#[test]
fn test_english_pdf_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let output = dir.path().join("out.txt");
    fs::write(&input, b"%PDF-1.4").unwrap();

    let pipeline = pipeline(&dir.path().join("corpora"), "en", "the cat sat on the mat.");
    let outcome = pipeline.process(&input, Some(&output)).unwrap();

    assert_eq!(outcome.language.as_str(), "english");
    assert_eq!(outcome.code.as_str(), "en");
    assert_eq!(fs::read_to_string(&output).unwrap(), "cat sat mat .");
    // The corpus was installed on first use.
    assert!(dir.path().join("corpora").join("english").is_file());
}

#[test]
fn test_existing_output_is_replaced() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let output = dir.path().join("out.txt");
    fs::write(&input, b"%PDF-1.4").unwrap();
    fs::write(&output, "stale content that is longer than the result").unwrap();

    let pipeline = pipeline(&dir.path().join("corpora"), "en", "the cat sat on the mat.");
    pipeline.process(&input, Some(&output)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "cat sat mat .");
}

#[test]
fn test_unknown_language_code_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let output = dir.path().join("out.txt");
    fs::write(&input, b"%PDF-1.4").unwrap();

    let pipeline = pipeline(&dir.path().join("corpora"), "xx", "qwrt zxcv");
    let result = pipeline.process(&input, Some(&output));

    match result {
        Err(StopwordError::UnknownLanguageCode(code)) => assert_eq!(code, "xx"),
        other => panic!("expected unknown language code, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_unsupported_language_names_the_language() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let output = dir.path().join("out.txt");
    fs::write(&input, b"%PDF-1.4").unwrap();

    let pipeline = pipeline(&dir.path().join("corpora"), "ja", "猫がマットの上に座った");
    let error = pipeline.process(&input, Some(&output)).unwrap_err();

    assert!(matches!(error, StopwordError::CorpusUnsupported { .. }));
    assert!(error.to_string().contains("japanese"));
    assert!(!error.is_recoverable());
    assert!(!output.exists());
}

#[test]
fn test_unsupported_extension_fails_before_extraction() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.docx");
    fs::write(&input, b"irrelevant").unwrap();

    let pipeline = pipeline(&dir.path().join("corpora"), "en", "the cat");
    let error = pipeline.process(&input, None).unwrap_err();

    assert!(matches!(error, StopwordError::UnsupportedDocument(_)));
    assert!(!dir.path().join("doc.txt").exists());
}

#[test]
fn test_corpus_is_fetched_once_across_documents() {
    let dir = tempdir().unwrap();
    let corpora = dir.path().join("corpora");
    let pipeline = pipeline(&corpora, "en", "the cat sat on the mat.");

    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        let input = dir.path().join(name);
        fs::write(&input, b"%PDF-1.4").unwrap();
        pipeline.process(&input, None).unwrap();
    }

    let installed: Vec<_> = fs::read_dir(&corpora).unwrap().collect();
    assert_eq!(installed.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("b.txt")).unwrap(),
        "cat sat mat ."
    );
}

#[test]
fn test_content_words_survive_english_filtering() {
    let dir = tempdir().unwrap();
    let pipeline = pipeline(&dir.path().join("corpora"), "en", "");

    let filtered = pipeline
        .remove_stopwords(
            "The world needs new research on computer information systems and their problems.",
        )
        .unwrap();

    assert_eq!(
        filtered.text(),
        "The world needs new research computer information systems problems ."
    );
}

#[test]
fn test_language_without_corpus_is_named_in_error() {
    let dir = tempdir().unwrap();
    let pipeline = pipeline(&dir.path().join("corpora"), "ca", "");

    match pipeline.remove_stopwords("el gat seu a la catifa.") {
        Err(StopwordError::CorpusUnsupported { language }) => assert_eq!(language, "catalan"),
        other => panic!("expected unsupported corpus, got {other:?}"),
    }
}
