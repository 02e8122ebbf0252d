// tests/common/mod.rs
//! Shared helpers for the root integration suites.

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempWorkspace;
