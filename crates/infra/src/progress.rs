use std::{
    io::{self, Write},
    path::Path,
};

use gloc_ports::progress::ProgressSink;
use gloc_shared_kernel::{InfrastructureError, Result};

/// Tells the user where the report ended up.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn on_directory(&self, root: &Path) -> Result<()> {
        tracing::info!(root = %root.display(), "counting lines");
        Ok(())
    }

    fn on_complete(&self, output: &Path) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Output can be found at {}", output.display())
            .map_err(|source| InfrastructureError::FileWrite { path: "<stdout>".into(), source })?;
        Ok(())
    }
}
