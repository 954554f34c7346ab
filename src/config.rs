//! Configuration loading for tunegrab.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Platforms searched when the config file does not list any.
pub const DEFAULT_SOURCES: &[&str] = &["kuwo", "migu"];

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Platform identifiers enabled for multi-platform search.
    pub sources: Vec<String>,
    /// Explicit path to the resolver binary; PATH lookup when unset.
    pub resolver_bin: Option<PathBuf>,
    /// Scratch root override; a fixed subdirectory of the system temporary
    /// directory when unset.
    pub scratch_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            resolver_bin: None,
            scratch_dir: None,
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    if config.sources.is_empty() {
        return Err(Error::Config("sources list cannot be empty".to_string()));
    }

    Ok(config)
}

/// Load config from default locations or return the default config.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./tunegrab.toml", "~/.config/tunegrab/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}
