// crates/infra/src/filesystem.rs
use std::path::Path;

use gloc_ports::filesystem::{DirectoryWalker, FileWalk};
use gloc_shared_kernel::{FilePath, GlocError, InfrastructureError, Result};
use ignore::{DirEntry, WalkBuilder};

/// Walks every regular file below a root, visiting names in lexicographic order.
///
/// Hidden files and ignore files (`.gitignore`, `.ignore`) get no special
/// treatment: all of them are counted. Symbolic links are followed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SortedWalker;

impl SortedWalker {
    pub fn new() -> Self {
        Self
    }

    fn builder(root: &Path, recursive: bool) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(true)
            .max_depth(if recursive { None } else { Some(1) })
            .sort_by_file_name(|a, b| a.cmp(b));
        builder
    }
}

impl DirectoryWalker for SortedWalker {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk<'a>(&'a self, root: &Path, recursive: bool) -> Result<FileWalk<'a>> {
        if !root.is_dir() {
            return Err(InfrastructureError::NotADirectory { path: root.to_path_buf() }.into());
        }

        let walk_root = root.to_path_buf();
        let files = Self::builder(root, recursive).build().filter_map(move |result| match result {
            Ok(entry) if is_regular_file(&entry) => Some(Ok(FilePath::from(entry.into_path()))),
            Ok(_) => None,
            Err(err) => Some(Err(GlocError::from(InfrastructureError::Walk {
                root: walk_root.clone(),
                details: err.to_string(),
            }))),
        });
        Ok(Box::new(files))
    }
}

// With follow_links enabled the reported file type is the link target's.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}
