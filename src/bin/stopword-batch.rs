//! `stopword-batch` binary: exits successfully only when every document passes.

use std::process;

use clap::Parser;

use stopword_removal::cli::args::BatchArgs;
use stopword_removal::cli::{EXIT_FAILURE, EXIT_SUCCESS, execute_batch, init_logging};

fn main() {
    let args = BatchArgs::parse();
    init_logging(args.common.verbosity());

    match execute_batch(&args) {
        Ok(report) if report.all_passed() => process::exit(EXIT_SUCCESS),
        Ok(_) => process::exit(EXIT_FAILURE),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_FAILURE);
        }
    }
}
