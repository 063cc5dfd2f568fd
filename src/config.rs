use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings from ~/.config/datebook/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Log filter directive, e.g. "warn" or "datebook_core=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Command file to read when no INPUT argument is given
    #[serde(default)]
    pub input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            input: None,
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Get the config directory path (~/.config/datebook)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("datebook");
    Ok(config_dir)
}

/// Get the config file path (~/.config/datebook/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the config file.
///
/// An explicitly given path must exist. The default location is optional:
/// when there is no file there (or no config directory at all), defaults
/// are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    match config_path() {
        Ok(path) if path.exists() => load_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Load and parse a config file at `path`.
pub fn load_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}
