//! `stopword-removal` binary.

use std::process;

use clap::Parser;

use stopword_removal::cli::args::StopwordArgs;
use stopword_removal::cli::{EXIT_FAILURE, EXIT_SUCCESS, execute, init_logging};

fn main() {
    let args = StopwordArgs::parse();
    init_logging(args.common.verbosity());

    match execute(&args) {
        Ok(_) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_FAILURE);
        }
    }
}
