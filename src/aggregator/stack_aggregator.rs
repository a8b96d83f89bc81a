//! Tally parsed stacks into leaf and namespace tables.

use super::frame_table::FrameTable;
use super::namespace::Namespace;
use crate::parser::{parse_line, StackLine};
use crate::utils::error::AnalyzeError;
use log::debug;
use std::io;

/// Running totals for one collapsed-stack profile
///
/// **Public** - main aggregation state
#[derive(Debug, Clone, Default)]
pub struct StackAggregator {
    /// Sum of the counts of every parsed line
    pub total_samples: u128,

    /// Samples keyed by the last frame of each stack
    pub leaf_totals: FrameTable,

    /// Samples keyed by the deepest service frame
    pub service_totals: FrameTable,

    /// Samples keyed by the deepest core frame
    pub core_totals: FrameTable,

    /// Samples keyed by the deepest tink frame
    pub tink_totals: FrameTable,

    /// Lines seen by `record_line`, blank ones included
    pub lines_read: u64,

    /// Lines that contributed samples
    pub parsed_lines: u64,

    /// Non-blank lines that failed to parse
    pub skipped_lines: u64,
}

impl StackAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for a namespace
    pub fn namespace_totals(&self, namespace: Namespace) -> &FrameTable {
        match namespace {
            Namespace::Service => &self.service_totals,
            Namespace::Core => &self.core_totals,
            Namespace::Tink => &self.tink_totals,
        }
    }

    fn namespace_totals_mut(&mut self, namespace: Namespace) -> &mut FrameTable {
        match namespace {
            Namespace::Service => &mut self.service_totals,
            Namespace::Core => &mut self.core_totals,
            Namespace::Tink => &mut self.tink_totals,
        }
    }

    /// Record one parsed stack
    ///
    /// Each namespace is scanned independently, so one stack can feed
    /// several tables. Every table is bounded by `total_samples`, so only
    /// the total needs an overflow check.
    ///
    /// # Errors
    /// `AnalyzeError::SampleOverflow` if the total would exceed `u128::MAX`;
    /// nothing is recorded in that case.
    pub fn record(&mut self, stack: &StackLine<'_>) -> Result<(), AnalyzeError> {
        self.total_samples = self
            .total_samples
            .checked_add(stack.count)
            .ok_or(AnalyzeError::SampleOverflow(self.lines_read))?;
        self.parsed_lines += 1;
        self.leaf_totals.add(stack.leaf(), stack.count);

        for namespace in Namespace::ALL {
            if let Some(frame) = namespace.deepest_frame(&stack.frames) {
                self.namespace_totals_mut(namespace).add(frame, stack.count);
            }
        }

        Ok(())
    }

    /// Parse and record a single raw line
    ///
    /// Returns false if the line was blank or malformed.
    pub fn record_line(&mut self, line: &str) -> Result<bool, AnalyzeError> {
        self.lines_read += 1;

        match parse_line(line) {
            Some(stack) => {
                self.record(&stack)?;
                Ok(true)
            }
            None => {
                if !line.trim().is_empty() {
                    self.skipped_lines += 1;
                    debug!("Skipping malformed line {}: {}", self.lines_read, line.trim());
                }
                Ok(false)
            }
        }
    }

    /// Drain a line source into the aggregator
    ///
    /// **Public** - main entry point for aggregation
    ///
    /// # Errors
    /// The first I/O error from `lines`, or a sample total overflow;
    /// totals recorded so far are kept.
    pub fn consume<I>(&mut self, lines: I) -> Result<(), AnalyzeError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        for line in lines {
            self.record_line(&line?)?;
        }

        debug!(
            "Aggregated {} samples from {} lines ({} skipped)",
            self.total_samples, self.parsed_lines, self.skipped_lines
        );

        Ok(())
    }
}
