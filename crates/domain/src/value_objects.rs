//! Value objects re-exported from the shared kernel.

pub use gloc_shared_kernel::value_objects::{DirectoryLabel, FileExtension, FilePath, LineCount};
