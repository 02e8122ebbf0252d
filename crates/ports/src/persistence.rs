// crates/ports/src/persistence.rs
use std::path::Path;

use gloc_shared_kernel::Result;

/// Port for storing a text artifact, replacing whatever was there before.
pub trait ArtifactWriter: Send + Sync {
    /// Creates missing parent directories and replaces the file's content with `contents`.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
