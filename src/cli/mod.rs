//! Command line interface shared by the `stopword-removal` and
//! `stopword-batch` binaries.

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;

/// Exit status for a run that did what was asked.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for a failed document or batch.
pub const EXIT_FAILURE: i32 = 1;

/// Initialize logging for the given verbosity level.
pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    let _ = Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}
