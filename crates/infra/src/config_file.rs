use std::path::{Path, PathBuf};

use gloc_shared_kernel::{ErrorContext, GlocError, InfrastructureError, Result};
use serde::Deserialize;

/// Supported configuration file syntaxes, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            other => Err(GlocError::configuration(format!(
                "unsupported config format '{}' for {}; expected .json, .yaml or .yml",
                other.unwrap_or_default(),
                path.display()
            ))),
        }
    }
}

/// Settings read from a config file. Absent keys leave the caller's defaults in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub enabled: Option<bool>,
    pub dirs: Option<Vec<PathBuf>>,
    pub build_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Self::parse(&contents, format).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => Ok(serde_json::from_str(contents)?),
            ConfigFormat::Yaml => Self::parse_yaml(contents),
        }
    }

    #[cfg(feature = "yaml")]
    fn parse_yaml(contents: &str) -> Result<Self> {
        // An empty YAML document means "no overrides".
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    #[cfg(not(feature = "yaml"))]
    fn parse_yaml(_contents: &str) -> Result<Self> {
        Err(GlocError::configuration("YAML config files require the `yaml` feature"))
    }
}
