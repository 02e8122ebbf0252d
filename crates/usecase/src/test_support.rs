//! In-memory port implementations shared by the unit tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use gloc_ports::{
    filesystem::{DirectoryWalker, FileWalk},
    measurement::LineCounter,
    persistence::ArtifactWriter,
    progress::ProgressSink,
};
use gloc_shared_kernel::{FilePath, InfrastructureError, LineCount, Result};

/// Files with fixed line counts; `None` marks a file that cannot be read.
#[derive(Default)]
pub struct MemoryFs {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Option<usize>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.dirs.insert(PathBuf::from(path));
        self
    }

    pub fn file(mut self, path: &str, lines: usize) -> Self {
        self.register_parents(path);
        self.files.insert(PathBuf::from(path), Some(lines));
        self
    }

    pub fn unreadable(mut self, path: &str) -> Self {
        self.register_parents(path);
        self.files.insert(PathBuf::from(path), None);
        self
    }

    fn register_parents(&mut self, path: &str) {
        let mut parent = Path::new(path).parent();
        while let Some(dir) = parent.filter(|p| !p.as_os_str().is_empty()) {
            self.dirs.insert(dir.to_path_buf());
            parent = dir.parent();
        }
    }
}

impl DirectoryWalker for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn walk<'a>(&'a self, root: &Path, recursive: bool) -> Result<FileWalk<'a>> {
        if !self.is_dir(root) {
            return Err(InfrastructureError::NotADirectory { path: root.to_path_buf() }.into());
        }
        let root = root.to_path_buf();
        let files = self.files.keys().filter(move |path| {
            if recursive { path.starts_with(&root) } else { path.parent() == Some(root.as_path()) }
        });
        Ok(Box::new(files.map(|path| Ok(FilePath::from(path.as_path())))))
    }
}

impl LineCounter for MemoryFs {
    fn count_lines(&self, path: &Path) -> Result<LineCount> {
        match self.files.get(path) {
            Some(Some(lines)) => Ok(LineCount::new(*lines)),
            _ => Err(InfrastructureError::FileRead {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }
            .into()),
        }
    }
}

/// Captures written artifacts instead of touching the disk.
#[derive(Default)]
pub struct RecordingWriter {
    pub written: Mutex<BTreeMap<PathBuf, String>>,
}

impl RecordingWriter {
    pub fn contents(&self, path: &str) -> Option<String> {
        self.written.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.written.lock().unwrap().is_empty()
    }
}

impl ArtifactWriter for RecordingWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.written.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub directories: Mutex<Vec<PathBuf>>,
    pub completed: Mutex<Option<PathBuf>>,
}

impl ProgressSink for RecordingProgress {
    fn on_directory(&self, root: &Path) -> Result<()> {
        self.directories.lock().unwrap().push(root.to_path_buf());
        Ok(())
    }

    fn on_complete(&self, output: &Path) -> Result<()> {
        *self.completed.lock().unwrap() = Some(output.to_path_buf());
        Ok(())
    }
}
