use std::collections::{BTreeMap, btree_map};

use crate::{
    model::FileEntry,
    value_objects::{FileExtension, LineCount},
};

/// Per-extension line totals for one root directory.
///
/// Iteration is ordered by extension so rendering never depends on the order
/// in which the filesystem handed out entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTally {
    totals: BTreeMap<FileExtension, LineCount>,
}

impl ExtensionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `lines` to the running total of `extension`, starting from zero.
    pub fn add(&mut self, extension: FileExtension, lines: LineCount) {
        *self.totals.entry(extension).or_default() += lines;
    }

    pub fn record(&mut self, entry: &FileEntry) {
        self.add(entry.extension.clone(), entry.lines);
    }

    pub fn get(&self, extension: &str) -> Option<LineCount> {
        self.totals.get(&FileExtension::from(extension)).copied()
    }

    /// Sum over every extension.
    pub fn total(&self) -> LineCount {
        self.totals.values().sum()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FileExtension, LineCount> {
        self.totals.iter()
    }

    /// Folds another tally into this one.
    pub fn merge(&mut self, other: ExtensionTally) {
        for (extension, lines) in other.totals {
            self.add(extension, lines);
        }
    }
}

impl<'a> IntoIterator for &'a ExtensionTally {
    type Item = (&'a FileExtension, &'a LineCount);
    type IntoIter = btree_map::Iter<'a, FileExtension, LineCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<FileEntry> for ExtensionTally {
    fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
        let mut tally = Self::new();
        for entry in iter {
            tally.add(entry.extension, entry.lines);
        }
        tally
    }
}

impl<E: Into<FileExtension>> FromIterator<(E, usize)> for ExtensionTally {
    fn from_iter<I: IntoIterator<Item = (E, usize)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (extension, lines) in iter {
            tally.add(extension.into(), LineCount::new(lines));
        }
        tally
    }
}
