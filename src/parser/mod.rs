//! Collapsed-stack input parsing.
//!
//! This module handles:
//! - Splitting a line into frames and a sample count
//! - Reading files with lossy UTF-8 decoding

pub mod collapsed;

// Re-export main types
pub use collapsed::{open_collapsed, parse_line, CollapsedReader, StackLine};
