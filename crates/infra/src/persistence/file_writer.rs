use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create the parent directory of `path` (and its ancestors) if missing.
    pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = Self::write_and_rename(&tmp, path, data);
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_and_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
        {
            let mut w = BufWriter::new(File::create(tmp)?);
            w.write_all(data)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
        }
        fs::rename(tmp, path)
    }
}
