// crates/ports/src/filesystem.rs
use std::path::Path;

use gloc_shared_kernel::{FilePath, Result};

/// Lazily produced files of a walk; each step may fail.
pub type FileWalk<'a> = Box<dyn Iterator<Item = Result<FilePath>> + 'a>;

/// Port for enumerating regular files below a root directory.
pub trait DirectoryWalker: Send + Sync {
    /// Whether `path` currently denotes a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Files under `root`; subdirectories are entered only when `recursive` is set.
    ///
    /// Fails up front with `NotADirectory` when `root` is not a directory.
    fn walk<'a>(&'a self, root: &Path, recursive: bool) -> Result<FileWalk<'a>>;
}
