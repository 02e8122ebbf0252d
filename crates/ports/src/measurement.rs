// crates/ports/src/measurement.rs
use std::path::Path;

use gloc_shared_kernel::{LineCount, Result};

/// Port for counting the lines of one file.
pub trait LineCounter: Send + Sync {
    fn count_lines(&self, path: &Path) -> Result<LineCount>;
}
