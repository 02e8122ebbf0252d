//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to implement the
//! two tasks of a run:
//!
//! - [`orchestrator`]: validate the configuration, aggregate every root and write the report
//! - [`manifest`]: record the configured roots as a stable task input
//! - [`aggregator`]: walk one root and tally its lines by extension
//! - [`counter`]: turn a single file into a counted entry
//! - [`dto`]: outcome returned to the caller
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregator;
pub mod counter;
pub mod dto;
pub mod manifest;
pub mod orchestrator;

pub use aggregator::DirectoryAggregator;
pub use counter::ExtensionCounter;
pub use dto::RunOutcome;
pub use manifest::WriteInputManifest;
pub use orchestrator::GenerateReport;

#[cfg(test)]
mod test_support;
