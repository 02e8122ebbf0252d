use std::{fmt, path::Path};

use crate::{model::ExtensionTally, value_objects::DirectoryLabel};

/// One configured root and its tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub label: DirectoryLabel,
    pub tally: ExtensionTally,
}

impl ReportSection {
    pub fn new(label: DirectoryLabel, tally: ExtensionTally) -> Self {
        Self { label, tally }
    }

    pub fn for_root(root: &Path, tally: ExtensionTally) -> Self {
        Self::new(DirectoryLabel::from_root(root), tally)
    }
}

/// Sections in the order the roots were configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(sections: Vec<ReportSection>) -> Self {
        Self { sections }
    }

    pub fn push(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn render(&self) -> String {
        ReportBuilder::render(&self.sections)
    }
}

impl FromIterator<ReportSection> for Report {
    fn from_iter<I: IntoIterator<Item = ReportSection>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ReportBuilder::write(f, &self.sections)
    }
}

/// Renders sections as the plain-text LOC report.
///
/// ```text
/// Directory 'source':
/// 'html' has '6' LOC in sum
/// 'xml' has '5' LOC in sum
/// ```
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn render(sections: &[ReportSection]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write(&mut out, sections);
        out
    }

    pub fn write<W: fmt::Write>(out: &mut W, sections: &[ReportSection]) -> fmt::Result {
        for section in sections {
            writeln!(out, "Directory '{}':", section.label)?;
            for (extension, lines) in &section.tally {
                writeln!(out, "'{extension}' has '{lines}' LOC in sum")?;
            }
        }
        Ok(())
    }
}
