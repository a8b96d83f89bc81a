//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Opens the collapsed-stack file
//! 2. Aggregates samples per leaf and per namespace
//! 3. Prints the ranked report
//! 4. Optionally writes the report as JSON

use super::models::{AnalyzeArgs, AnalyzeOutcome};
use crate::aggregator::StackAggregator;
use crate::output::{write_json_report, write_text_report, Report};
use crate::parser::open_collapsed;
use crate::utils::config::MAX_TOP_N;
use crate::utils::error::AnalyzeError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// User-facing messages and the report go to `out`.
///
/// # Errors
/// * Read failures other than a missing file
/// * Write failures on `out` or the JSON path
pub fn execute_analyze(args: &AnalyzeArgs, mut out: impl Write) -> Result<AnalyzeOutcome> {
    let start_time = Instant::now();

    let reader = match open_collapsed(&args.input) {
        Ok(reader) => reader,
        Err(AnalyzeError::FileNotFound(path)) => {
            writeln!(out, "File not found: {}", path.display())?;
            return Ok(AnalyzeOutcome::FileNotFound);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {}", args.input.display()));
        }
    };

    info!("Analyzing: {}", args.input.display());

    let mut aggregator = StackAggregator::new();
    aggregator
        .consume(reader)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if aggregator.total_samples == 0 {
        writeln!(out, "No samples found")?;
        return Ok(AnalyzeOutcome::NoSamples);
    }

    let report = Report::from_aggregator(
        &aggregator,
        &args.input.display().to_string(),
        args.top_n,
    );

    write_text_report(&report, &mut out).context("Failed to write report")?;

    if let Some(json_path) = &args.json_output {
        write_json_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ JSON report written to: {}", json_path.display());
    }

    debug!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(AnalyzeOutcome::Reported)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    Ok(())
}
