//! Cumulative sample counts keyed by frame name.

use std::collections::HashMap;

/// Frame -> samples table that remembers insertion order
///
/// **Public** - one table per report section
///
/// Insertion order makes ranking deterministic: frames with equal counts
/// are listed in the order they were first seen in the input.
#[derive(Debug, Clone, Default)]
pub struct FrameTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u128)>,
}

impl FrameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add samples to a frame, inserting it on first sight
    pub fn add(&mut self, frame: &str, samples: u128) {
        match self.index.get(frame) {
            Some(&slot) => {
                let total = &mut self.entries[slot].1;
                *total = total.saturating_add(samples);
            }
            None => {
                self.index.insert(frame.to_string(), self.entries.len());
                self.entries.push((frame.to_string(), samples));
            }
        }
    }

    /// Samples recorded for a frame (0 if never seen)
    pub fn get(&self, frame: &str) -> u128 {
        self.index
            .get(frame)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Sum of all recorded samples
    pub fn total(&self) -> u128 {
        self.entries
            .iter()
            .fold(0u128, |acc, (_, samples)| acc.saturating_add(*samples))
    }

    /// Number of distinct frames
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top `n` frames by samples, descending
    ///
    /// Ties keep first-seen order (the sort is stable).
    pub fn top(&self, n: usize) -> Vec<(&str, u128)> {
        let mut ranked: Vec<(&str, u128)> = self
            .entries
            .iter()
            .map(|(frame, samples)| (frame.as_str(), *samples))
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
