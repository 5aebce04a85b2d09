//! Command implementations for the CLI binaries.

use anyhow::Context;
use log::{debug, info};

use crate::batch::{BatchOptions, BatchReport, run_batch};
use crate::cli::args::{BatchArgs, StopwordArgs};
use crate::cli::output::{output_outcome, output_report};
use crate::pipeline::{Pipeline, ProcessOutcome};

/// Remove stop words from the single document named by `args`.
pub fn execute(args: &StopwordArgs) -> anyhow::Result<ProcessOutcome> {
    let config = args
        .common
        .pipeline_config()
        .context("Failed to load configuration")?;
    debug!("Using corpus directory {}", config.corpus_dir.display());

    let pipeline = Pipeline::new(config).context("Failed to set up the pipeline")?;
    let outcome = pipeline
        .process(&args.infile, args.outfile.as_deref())
        .with_context(|| format!("Failed to process {}", args.infile.display()))?;

    output_outcome(&outcome, &args.common)?;
    Ok(outcome)
}

/// Process and verify every document in the directory named by `args`.
pub fn execute_batch(args: &BatchArgs) -> anyhow::Result<BatchReport> {
    if !args.input_dir.is_dir() {
        anyhow::bail!("{} is not a directory", args.input_dir.display());
    }

    let config = args
        .common
        .pipeline_config()
        .context("Failed to load configuration")?;
    let pipeline = Pipeline::new(config).context("Failed to set up the pipeline")?;

    let options = BatchOptions {
        output_dir: args.output_dir.clone(),
        keep_outputs: args.keep_outputs,
    };
    info!("Running batch over {}", args.input_dir.display());
    let report = run_batch(&pipeline, &args.input_dir, &options)
        .with_context(|| format!("Failed to run batch over {}", args.input_dir.display()))?;

    output_report(&report, &args.common)?;
    Ok(report)
}
