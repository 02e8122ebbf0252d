use std::path::PathBuf;

use gloc_domain::report::Report;

/// What a report run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run was disabled; nothing was read or written.
    Skipped,
    /// The report was rendered and stored at `path` (absolute).
    Written { path: PathBuf, report: Report },
}

impl RunOutcome {
    pub fn output_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Skipped => None,
            Self::Written { path, .. } => Some(path),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}
