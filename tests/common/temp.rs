use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch project directory removed on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().expect("create temp workspace");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[allow(dead_code)]
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.join(rel);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    #[allow(dead_code)]
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.join(rel)).expect("read artifact")
    }
}

/// Five lines, no trailing terminator.
#[allow(dead_code)]
pub const FIVE_LINES: &str = "This \n is \n droidcon \n italy \n turin";
