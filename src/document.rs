//! Document text extraction.
//!
//! The pipeline only accepts the extensions enumerated by [`DocumentKind`]; the
//! check happens on the path before any bytes are read.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, StopwordError};

/// Supported input document types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `.pdf`
    Pdf,
    /// `.txt`, `.text`, `.md`
    PlainText,
}

impl DocumentKind {
    /// Classify a path by its final extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" | "text" | "md" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    /// Like [`from_path`](Self::from_path) but failing with
    /// [`StopwordError::UnsupportedDocument`].
    pub fn require(path: &Path) -> Result<Self> {
        Self::from_path(path).ok_or_else(|| {
            StopwordError::unsupported_document(format!(
                "{} is not a supported document (expected .pdf, .txt, .text or .md)",
                path.display()
            ))
        })
    }
}

/// Produces the raw text of a document.
pub trait DocumentExtractor: Send + Sync {
    /// Extract the text of the document at `path`.
    fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String>;

    /// Get the name of this extractor (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Reads documents from the filesystem: PDFs through `pdf-extract`, plain text
/// as UTF-8.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileExtractor;

impl FileExtractor {
    pub fn new() -> Self {
        FileExtractor
    }
}

impl DocumentExtractor for FileExtractor {
    fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| {
            StopwordError::extraction(format!("cannot read {}: {e}", path.display()))
        })?;

        let text = match kind {
            DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                StopwordError::extraction(format!("{}: {e}", path.display()))
            })?,
            DocumentKind::PlainText => String::from_utf8(bytes).map_err(|e| {
                StopwordError::extraction(format!("{} is not valid UTF-8: {e}", path.display()))
            })?,
        };

        debug!(
            "Text successfully read from {} ({} bytes)",
            path.display(),
            text.len()
        );
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
