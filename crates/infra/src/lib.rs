// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config_file;
pub mod filesystem;
pub mod measurement;
pub mod persistence;
pub mod progress;

pub use config_file::{ConfigFile, ConfigFormat};
pub use filesystem::SortedWalker;
pub use measurement::ByteLineCounter;
pub use persistence::FsArtifactWriter;
pub use progress::ConsoleProgress;
