//! `gloc`: lines-of-code totals per file extension for a set of directories.
//!
//! The binary is a thin shell over the workspace crates: [`cli`] parses the
//! arguments, [`bootstrap`] resolves the configuration and wires the
//! filesystem adapters into the use cases, and [`logging`] installs the
//! tracing subscriber.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;
pub mod logging;

use anyhow::Result;
use clap::Parser;

pub use bootstrap::{Settings, run_with};
pub use cli::{Cli, Command};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses the process arguments and runs the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose());
    run_with(cli.command)
}
