use std::path::Path;

use gloc_domain::config::GlocConfig;
use gloc_ports::persistence::ArtifactWriter;
use gloc_shared_kernel::Result;

/// Records the configured roots so a build cache can key on them.
///
/// Runs whether or not the report itself is enabled; identical
/// configuration always yields identical bytes.
pub struct WriteInputManifest<'a> {
    writer: &'a dyn ArtifactWriter,
}

impl<'a> WriteInputManifest<'a> {
    pub fn new(writer: &'a dyn ArtifactWriter) -> Self {
        Self { writer }
    }

    pub fn run(&self, config: &GlocConfig, manifest: &Path) -> Result<()> {
        let contents = render_manifest(config);
        self.writer.write(manifest, &contents)?;
        tracing::debug!(path = %manifest.display(), dirs = config.dirs.len(), "input manifest written");
        Ok(())
    }
}

/// One configured root per line, in configured order.
pub fn render_manifest(config: &GlocConfig) -> String {
    config.dirs.iter().map(|dir| format!("{}\n", dir.display())).collect()
}
