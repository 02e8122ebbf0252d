use std::path::{Path, PathBuf};

use gloc_domain::{
    config::{GlocConfig, not_a_directory},
    report::{Report, ReportSection},
};
use gloc_ports::{
    filesystem::DirectoryWalker, measurement::LineCounter, persistence::ArtifactWriter, progress::ProgressSink,
};
use gloc_shared_kernel::{ApplicationError, GlocError, Result, path::logical_absolute};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{aggregator::DirectoryAggregator, dto::RunOutcome};

/// Produces the LOC report for every configured root.
pub struct GenerateReport<'a> {
    walker: &'a dyn DirectoryWalker,
    aggregator: DirectoryAggregator<'a>,
    writer: &'a dyn ArtifactWriter,
    progress: &'a dyn ProgressSink,
}

impl<'a> GenerateReport<'a> {
    pub fn new(
        walker: &'a dyn DirectoryWalker,
        lines: &'a dyn LineCounter,
        writer: &'a dyn ArtifactWriter,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self { walker, aggregator: DirectoryAggregator::new(walker, lines), writer, progress }
    }

    /// Runs the report task.
    ///
    /// A disabled configuration returns [`RunOutcome::Skipped`] without reading
    /// the configured roots or touching `output`. Otherwise every root is
    /// validated before any of them is walked, and `output` is only written once
    /// the whole report has been computed.
    pub fn run(&self, config: &GlocConfig, output: &Path) -> Result<RunOutcome> {
        if !config.enabled {
            tracing::debug!("gloc is disabled; skipping report");
            return Ok(RunOutcome::Skipped);
        }

        let roots = self.validate(config)?;
        let report = self.build_report(roots)?;
        self.writer.write(output, &report.render())?;

        let path = logical_absolute(output);
        tracing::info!(path = %path.display(), sections = report.sections().len(), "report written");
        self.progress.on_complete(&path)?;
        Ok(RunOutcome::Written { path, report })
    }

    fn validate<'c>(&self, config: &'c GlocConfig) -> Result<&'c [PathBuf]> {
        let roots = config.require_dirs()?;
        if let Some(bad) = roots.iter().find(|root| !self.walker.is_dir(root)) {
            return Err(not_a_directory(bad).into());
        }
        Ok(roots)
    }

    fn aggregate_section(&self, root: &Path) -> Result<ReportSection> {
        self.progress.on_directory(root)?;
        let tally = self.aggregator.aggregate(root).map_err(|source| -> GlocError {
            ApplicationError::AggregationFailed { root: root.to_path_buf(), source: Box::new(source) }.into()
        })?;
        Ok(ReportSection::for_root(root, tally))
    }

    #[cfg(not(feature = "parallel"))]
    fn build_report(&self, roots: &[PathBuf]) -> Result<Report> {
        roots.iter().map(|root| self.aggregate_section(root)).collect()
    }

    // Sections are collected by index, so the report keeps the configured order.
    #[cfg(feature = "parallel")]
    fn build_report(&self, roots: &[PathBuf]) -> Result<Report> {
        let sections = roots.par_iter().map(|root| self.aggregate_section(root)).collect::<Result<Vec<_>>>()?;
        Ok(Report::new(sections))
    }
}
