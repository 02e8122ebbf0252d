//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: directory checks and file enumeration
//! - [`measurement`]: counting the lines of a single file
//! - [`persistence`]: writing report artifacts
//! - [`progress`]: user-facing feedback during a run
//!
//! These ports allow the use cases to remain independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;
pub mod progress;
