//! Argument and result types for commands.

use crate::utils::config::DEFAULT_TOP_N;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Collapsed-stack file to read
    pub input: PathBuf,

    /// Entries to print per section
    pub top_n: usize,

    /// Optional path for a JSON copy of the report
    pub json_output: Option<PathBuf>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            top_n: DEFAULT_TOP_N,
            json_output: None,
        }
    }
}

/// How an analyze run ended
///
/// Unexpected I/O failures are returned as errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// Report printed
    Reported,
    /// Input path does not exist
    FileNotFound,
    /// Input parsed but held no samples
    NoSamples,
}

impl AnalyzeOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> u8 {
        match self {
            AnalyzeOutcome::Reported => 0,
            AnalyzeOutcome::NoSamples => 1,
            AnalyzeOutcome::FileNotFound => 2,
        }
    }
}
