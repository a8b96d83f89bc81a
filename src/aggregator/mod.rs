//! Aggregation of collapsed stacks into ranked frame tables.
//!
//! This module turns parsed stack lines into:
//! - Total sample count
//! - Samples per leaf frame
//! - Samples per deepest frame in each tracked namespace

pub mod frame_table;
pub mod namespace;
pub mod stack_aggregator;

// Re-export main types
pub use frame_table::FrameTable;
pub use namespace::Namespace;
pub use stack_aggregator::StackAggregator;
