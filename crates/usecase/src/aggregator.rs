use std::path::Path;

use gloc_domain::model::ExtensionTally;
use gloc_ports::{filesystem::DirectoryWalker, measurement::LineCounter};
use gloc_shared_kernel::Result;

use crate::counter::ExtensionCounter;

/// Walks one root and sums line counts per extension.
pub struct DirectoryAggregator<'a> {
    walker: &'a dyn DirectoryWalker,
    counter: ExtensionCounter<'a>,
}

impl<'a> DirectoryAggregator<'a> {
    pub fn new(walker: &'a dyn DirectoryWalker, lines: &'a dyn LineCounter) -> Self {
        Self { walker, counter: ExtensionCounter::new(lines) }
    }

    /// Recursive tally of every file under `root`.
    pub fn aggregate(&self, root: &Path) -> Result<ExtensionTally> {
        self.aggregate_with(root, true)
    }

    pub fn aggregate_with(&self, root: &Path, recursive: bool) -> Result<ExtensionTally> {
        let mut tally = ExtensionTally::new();
        let mut files = 0usize;
        for path in self.walker.walk(root, recursive)? {
            let entry = self.counter.count(path?)?;
            tracing::trace!(path = %entry.path, ext = %entry.extension, lines = %entry.lines, "counted");
            tally.record(&entry);
            files += 1;
        }
        tracing::debug!(root = %root.display(), files, lines = %tally.total(), "aggregated directory");
        Ok(tally)
    }
}
