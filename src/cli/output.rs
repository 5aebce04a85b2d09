//! Output formatting for CLI commands.

use serde::Serialize;

use crate::batch::BatchReport;
use crate::cli::args::{CommonArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::ProcessOutcome;

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CommonArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print the outcome of a single document.
pub fn output_outcome(outcome: &ProcessOutcome, args: &CommonArgs) -> Result<()> {
    output_result("Successfully removed stop words.", outcome, args)
}

/// Print a batch report, listing failures in human mode.
pub fn output_report(report: &BatchReport, args: &CommonArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(report, args);
    }

    if args.verbosity() > 0 {
        for failure in &report.failures {
            println!(
                "FAILED {} [{}]: {}",
                failure.document.display(),
                failure.kind,
                failure.message
            );
        }
    }
    if report.all_passed() {
        println!("All tests passed ({report})");
    } else {
        println!("Test failed for {} documents ({report})", report.failed());
    }
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CommonArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }
    println!("{message}");

    if args.verbosity() > 1 {
        let value = serde_json::to_value(result)?;
        if let serde_json::Value::Object(obj) = value {
            for (key, val) in obj {
                println!("  {key}: {}", format_value(&val));
            }
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CommonArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&serde_json::json!("english")), "english");
        assert_eq!(format_value(&serde_json::json!(7)), "7");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }
}
