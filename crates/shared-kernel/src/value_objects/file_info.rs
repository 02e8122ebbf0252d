// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::{Borrow, Cow},
    fmt,
    ops::Deref,
    path::{Component, Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Wrapper around `PathBuf` that guarantees UTF-8 displayability in higher layers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.0.display()
    }

    /// Returns a UTF-8 view suitable for logging and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    pub fn extension(&self) -> FileExtension {
        FileExtension::from_path(&self.0)
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_path_buf())
    }
}
impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}
impl From<String> for FilePath {
    fn from(path: String) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
impl Deref for FilePath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl Borrow<Path> for FilePath {
    fn borrow(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Case-sensitive extension without the leading dot; empty when the name has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(ext: impl Into<String>) -> Self {
        Self(ext.into())
    }

    /// Text after the last `.` of the base name.
    ///
    /// A leading dot does not start an extension, so `.bashrc` has none while
    /// `archive.tar.gz` yields `gz` and `name.` yields an empty extension.
    pub fn from_file_name(name: &str) -> Self {
        match name.rfind('.') {
            Some(0) | None => Self::no_ext(),
            Some(idx) => Self(name[idx + 1..].to_string()),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .map(|name| Self::from_file_name(&name.to_string_lossy()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn no_ext() -> Self {
        Self(String::new())
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl AsRef<str> for FileExtension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name shown in a report header: the last component of a configured root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct DirectoryLabel(String);

impl DirectoryLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// `source/` gives `source`, `.` gives `.`, and `a/..` gives `..`.
    pub fn from_root(root: &Path) -> Self {
        let label = match root.components().next_back() {
            Some(Component::RootDir) | Some(Component::Prefix(_)) | None => String::new(),
            Some(component) => component.as_os_str().to_string_lossy().into_owned(),
        };
        Self(label)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DirectoryLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
