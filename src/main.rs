//! Collapsed Analyzer CLI
//!
//! Reads a collapsed-stack profile and prints where the samples went.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use collapsed_analyzer::commands::{execute_analyze, validate_args, AnalyzeArgs};
use collapsed_analyzer::utils::config::DEFAULT_TOP_N;

/// Collapsed Analyzer - rank hot frames in a collapsed-stack profile
#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Collapsed-stack file ("frame;frame;frame count" per line)
    collapsed_file: PathBuf,

    /// Number of entries per section
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Also write the report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    // Usage errors exit with status 2
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the report
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        input: cli.collapsed_file,
        top_n: cli.top,
        json_output: cli.json,
    };

    validate_args(&args)?;

    let outcome = execute_analyze(&args, io::stdout().lock())?;

    Ok(ExitCode::from(outcome.exit_code()))
}
