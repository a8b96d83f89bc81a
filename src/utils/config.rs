//! Configuration and constants for the analyzer.

/// Number of entries printed per report section
pub const DEFAULT_TOP_N: usize = 12;

/// Upper bound accepted for `--top`
pub const MAX_TOP_N: usize = 1000;

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Namespace markers, matched as plain substrings of a frame name.
// Java frames in async-profiler output use '/' as the package separator.
pub const SERVICE_MARKERS: &[&str] = &["no/ssb/dlp/pseudo/service"];
pub const CORE_MARKERS: &[&str] = &["no/ssb/dlp/pseudo/core"];
pub const TINK_MARKERS: &[&str] = &["com/google/crypto/tink", "no/ssb/crypto/tink"];
