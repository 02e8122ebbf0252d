use std::path::{Path, PathBuf};

use gloc_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Report location relative to the build directory.
pub const REPORT_FILE: &str = "gloc/gloc.txt";
/// Input manifest location relative to the build directory.
pub const MANIFEST_FILE: &str = "gloc/inputdirs.txt";
pub const DEFAULT_BUILD_DIR: &str = "build";

/// User-facing switches for a report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlocConfig {
    pub enabled: bool,
    pub dirs: Vec<PathBuf>,
}

impl Default for GlocConfig {
    fn default() -> Self {
        Self { enabled: true, dirs: Vec::new() }
    }
}

impl GlocConfig {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { enabled: true, dirs: dirs.into_iter().map(Into::into).collect() }
    }

    pub fn disabled() -> Self {
        Self { enabled: false, dirs: Vec::new() }
    }

    /// Configured roots, or an error when none were given.
    pub fn require_dirs(&self) -> DomainResult<&[PathBuf]> {
        if self.dirs.is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "dirs should be set".to_string() });
        }
        Ok(&self.dirs)
    }
}

/// Error for a configured root that turned out not to be a directory.
pub fn not_a_directory(dir: &Path) -> DomainError {
    DomainError::InvalidConfiguration { reason: format!("{} input should be directory", dir.display()) }
}

/// Where the artifacts of a run are placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    build_dir: PathBuf,
    report_override: Option<PathBuf>,
}

impl BuildLayout {
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self { build_dir: build_dir.into(), report_override: None }
    }

    #[must_use]
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_override = Some(path.into());
        self
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn report_path(&self) -> PathBuf {
        self.report_override.clone().unwrap_or_else(|| self.build_dir.join(REPORT_FILE))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.build_dir.join(MANIFEST_FILE)
    }
}

impl Default for BuildLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_DIR)
    }
}
