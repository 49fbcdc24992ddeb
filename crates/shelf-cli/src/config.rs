//! Optional CLI configuration and default path resolution.
//!
//! The config file lives at `$XDG_CONFIG_HOME/shelf/config.toml` and may
//! override the data file and log file locations. Flags and env vars win
//! over the config file, which wins over the XDG defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub inventory: InventorySection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct InventorySection {
    /// Path to the books data file
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogSection {
    /// Path to the log file
    pub file: Option<String>,
}

/// Read the config file if one exists; otherwise all defaults.
pub fn load_config() -> anyhow::Result<ShelfConfig> {
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(ShelfConfig::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("books.json"))
}

pub fn default_log_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("shelf.log"))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("shelf"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("shelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
