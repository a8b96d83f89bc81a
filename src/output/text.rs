//! Plain-text report writer.

use super::report::Report;
use std::io::{self, Write};

/// Write the human-readable report
///
/// **Public** - used by the analyze command for stdout
///
/// Layout:
/// ```text
/// Total samples: 15
///
/// Top leaf frames
///    66.67%  c
///    33.33%  d
/// ```
pub fn write_text_report(report: &Report, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "Total samples: {}", report.total_samples)?;

    for section in &report.sections {
        writeln!(out)?;
        writeln!(out, "{}", section.title)?;
        for entry in &section.entries {
            writeln!(out, "  {:6.2}%  {}", entry.percentage, entry.frame)?;
        }
    }

    out.flush()
}
