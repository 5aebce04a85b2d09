//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::Result;

/// Remove stop words from a document in its detected language
#[derive(Parser, Debug, Clone)]
#[command(name = "stopword-removal")]
#[command(about = "Detect a document's language and strip its stop words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StopwordArgs {
    /// Input document (.pdf, .txt, .text or .md)
    #[arg(short = 'i', long = "infile", value_name = "INPUT_FILE")]
    pub infile: PathBuf,

    /// Output text file (default: input path with a .txt extension)
    #[arg(short = 'o', long = "outfile", value_name = "OUTPUT_FILE")]
    pub outfile: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Process every document in a directory and verify no stop words remain
#[derive(Parser, Debug, Clone)]
#[command(name = "stopword-batch")]
#[command(about = "Run stopword removal over a directory and verify the results")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct BatchArgs {
    /// Directory containing the input documents
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory for output files (default: INPUT_DIR/output)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep output files after verification
    #[arg(long)]
    pub keep_outputs: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Flags shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding installed stop-word corpora
    #[arg(long, env = "STOPWORD_CORPUS_DIR", value_name = "DIR")]
    pub corpus_dir: Option<PathBuf>,

    /// Language directory JSON file (default: bundled directory)
    #[arg(long, env = "STOPWORD_LANGUAGE_DIRECTORY", value_name = "FILE")]
    pub language_directory: Option<PathBuf>,

    /// Fail when the language guess is not reliable
    #[arg(long)]
    pub require_reliable: bool,
}

impl CommonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the pipeline configuration: config file (or defaults), then flags.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(dir) = &self.corpus_dir {
            config.corpus_dir = dir.clone();
        }
        if let Some(path) = &self.language_directory {
            config.language_directory = Some(path.clone());
        }
        if self.require_reliable {
            config.require_reliable = true;
        }
        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
