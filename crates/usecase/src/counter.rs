use gloc_domain::{model::FileEntry, value_objects::FilePath};
use gloc_ports::measurement::LineCounter;
use gloc_shared_kernel::Result;

/// Pairs a file's extension with its line count.
pub struct ExtensionCounter<'a> {
    lines: &'a dyn LineCounter,
}

impl<'a> ExtensionCounter<'a> {
    pub fn new(lines: &'a dyn LineCounter) -> Self {
        Self { lines }
    }

    /// Reads `path` and returns its counted entry; read failures are passed through.
    pub fn count(&self, path: FilePath) -> Result<FileEntry> {
        let lines = self.lines.count_lines(path.as_path())?;
        Ok(FileEntry::new(path, lines))
    }
}
