//! # Domain
//!
//! Pure model of a lines-of-code report:
//!
//! - [`config`]: what to count and where the artifacts go
//! - [`model`]: per-file entries and per-directory extension tallies
//! - [`report`]: ordered sections and their text rendering
//!
//! Nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod report;
pub mod value_objects;

pub use config::{BuildLayout, GlocConfig};
pub use model::{ExtensionTally, FileEntry};
pub use report::{Report, ReportBuilder, ReportSection};
