//! Report model shared by the text and JSON writers.
//!
//! The report is a snapshot: ranking and percentages are computed once
//! from the aggregator, then rendered by any writer.

use crate::aggregator::{FrameTable, Namespace, StackAggregator};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Full analysis report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input file the report was built from
    pub source: String,

    /// Total samples across all parsed stacks
    pub total_samples: u128,

    /// Leaf section followed by one section per namespace
    pub sections: Vec<ReportSection>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// One ranked table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub entries: Vec<ReportEntry>,
}

/// A frame and its share of all samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub frame: String,
    pub samples: u128,

    /// Percentage of `Report::total_samples`
    pub percentage: f64,
}

impl Report {
    /// Build a report keeping the top `top_n` frames per section
    ///
    /// **Public** - main entry point for reporting
    pub fn from_aggregator(agg: &StackAggregator, source: &str, top_n: usize) -> Self {
        let total = agg.total_samples;

        let mut sections = vec![build_section("Top leaf frames", &agg.leaf_totals, total, top_n)];
        for namespace in Namespace::ALL {
            let title = format!("Top {} frames", namespace);
            sections.push(build_section(
                &title,
                agg.namespace_totals(namespace),
                total,
                top_n,
            ));
        }

        Report {
            version: REPORT_SCHEMA_VERSION.to_string(),
            source: source.to_string(),
            total_samples: total,
            sections,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Rank one table into a section
///
/// **Private** - internal conversion
fn build_section(title: &str, table: &FrameTable, total: u128, top_n: usize) -> ReportSection {
    let entries = table
        .top(top_n)
        .into_iter()
        .map(|(frame, samples)| ReportEntry {
            frame: frame.to_string(),
            samples,
            percentage: percentage(samples, total),
        })
        .collect();

    ReportSection {
        title: title.to_string(),
        entries,
    }
}

fn percentage(samples: u128, total: u128) -> f64 {
    if total > 0 {
        (samples as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}
