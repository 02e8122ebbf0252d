// src/bootstrap.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use gloc_domain::{BuildLayout, GlocConfig};
use gloc_infra::{ByteLineCounter, ConfigFile, ConsoleProgress, FsArtifactWriter, SortedWalker};
use gloc_ports::progress::ProgressSink;
use gloc_usecase::{GenerateReport, RunOutcome, WriteInputManifest};

use crate::cli::{Command, RunArgs};

/// Fully resolved inputs of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: GlocConfig,
    pub layout: BuildLayout,
}

impl Settings {
    /// Layers the CLI over the optional config file over the defaults.
    pub fn resolve(args: &RunArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let mut config = GlocConfig::default();
        if let Some(enabled) = file.enabled {
            config.enabled = enabled;
        }
        if let Some(dirs) = file.dirs {
            config.dirs = dirs;
        }
        if !args.dirs.is_empty() {
            config.dirs.clone_from(&args.dirs);
        }
        if args.disable {
            config.enabled = false;
        }

        let mut layout = match args.build_dir.clone().or(file.build_dir) {
            Some(build_dir) => BuildLayout::new(build_dir),
            None => BuildLayout::default(),
        };
        if let Some(output) = &args.output {
            layout = layout.with_report_path(output);
        }

        Ok(Self { config, layout })
    }

    pub fn report_path(&self) -> PathBuf {
        self.layout.report_path()
    }
}

pub fn run_with(command: Command) -> Result<()> {
    let settings = Settings::resolve(command.options())?;
    tracing::debug!(?settings, "resolved settings");

    write_manifest(&settings)?;
    if let Command::Run(_) = command {
        generate(&settings, &ConsoleProgress)?;
    }
    Ok(())
}

pub fn write_manifest(settings: &Settings) -> Result<()> {
    let writer = FsArtifactWriter::new();
    let path = settings.layout.manifest_path();
    WriteInputManifest::new(&writer)
        .run(&settings.config, &path)
        .with_context(|| format!("failed to write input manifest {}", path.display()))
}

pub fn generate(settings: &Settings, progress: &dyn ProgressSink) -> Result<RunOutcome> {
    let walker = SortedWalker::new();
    let lines = ByteLineCounter::new();
    let writer = FsArtifactWriter::new();
    let command = GenerateReport::new(&walker, &lines, &writer, progress);

    let outcome = command.run(&settings.config, &settings.report_path())?;
    Ok(outcome)
}
