pub mod file_reader;
pub mod file_writer;

use std::path::Path;

use gloc_ports::persistence::ArtifactWriter;
use gloc_shared_kernel::{InfrastructureError, Result};

pub use file_reader::FileReader;
pub use file_writer::FileWriter;

/// Writes artifacts to the local filesystem, replacing them atomically.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsArtifactWriter;

impl FsArtifactWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactWriter for FsArtifactWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        FileWriter::ensure_parent(path).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "create parent directory".to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        FileWriter::atomic_write(path, contents.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        Ok(())
    }
}
