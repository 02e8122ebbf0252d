use crate::value_objects::{FileExtension, FilePath, LineCount};

/// A counted file: where it lives, how it is grouped, and how many lines it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: FilePath,
    pub extension: FileExtension,
    pub lines: LineCount,
}

impl FileEntry {
    /// Builds an entry whose extension is derived from the file name.
    pub fn new(path: impl Into<FilePath>, lines: LineCount) -> Self {
        let path = path.into();
        let extension = path.extension();
        Self { path, extension, lines }
    }
}
