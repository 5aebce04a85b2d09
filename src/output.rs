//! Writing filtered text to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Result, StopwordError};

/// Default output path: `input` with its final extension replaced.
///
/// `report.pdf` becomes `report.txt`; a path without an extension gains one.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Writes output files so a failure never leaves a half-written file behind.
///
/// Content goes to a temporary file in the destination directory which is then
/// renamed over the destination. To the caller this behaves like
/// create-or-truncate.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputSink;

impl OutputSink {
    pub fn new() -> Self {
        OutputSink
    }

    /// Write `contents` to `path`, replacing any existing file.
    pub fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file =
            NamedTempFile::new_in(parent).map_err(|e| StopwordError::output_write(path, e))?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| StopwordError::output_write(path, e))?;
        file.persist(path)
            .map_err(|e| StopwordError::output_write(path, e.error))?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    /// Remove a previously written output, ignoring files that are already gone.
    pub fn remove(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StopwordError::Io(e)),
        }
    }
}
