// crates/ports/src/progress.rs
use std::path::Path;

use gloc_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_directory(&self, root: &Path) -> Result<()>;
    fn on_complete(&self, output: &Path) -> Result<()>;
}

/// Sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn on_directory(&self, _root: &Path) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _output: &Path) -> Result<()> {
        Ok(())
    }
}
