//! Collapsed Analyzer
//!
//! Summarizes collapsed-stack profiles: total samples, the hottest leaf
//! frames, and the hottest frames inside the pseudo service, pseudo core
//! and Tink crypto namespaces.
//!
//! This crate provides the core implementation for the `analyze` CLI tool.
//!
//! ```bash
//! analyze profile.collapsed
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
