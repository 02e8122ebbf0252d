// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::VERSION;

#[derive(Parser, Debug)]
#[command(name = "gloc", version = VERSION, about = "Count lines of code per file extension")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.command.options().verbose
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the input manifest, then the LOC report
    Run(RunArgs),
    /// Write only the input manifest
    Inputs(RunArgs),
}

impl Command {
    pub fn options(&self) -> &RunArgs {
        match self {
            Self::Run(args) | Self::Inputs(args) => args,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Directories to count; replaces `dirs` from the config file
    #[arg(value_name = "DIRS")]
    pub dirs: Vec<PathBuf>,

    /// Config file (.json, .yaml or .yml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build directory holding the gloc/ artifacts
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Report location (default: <build-dir>/gloc/gloc.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip the report; the manifest is still written
    #[arg(long)]
    pub disable: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
