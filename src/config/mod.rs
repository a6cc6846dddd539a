//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The settings cover the ingestion surface: which file types the drop zone
//! accepts, the prompt shown while a drag hovers the window, and how long a
//! raster decode may run before it is abandoned.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedDropzone";

pub const DEFAULT_DROP_TEXT: &str = "Drop image";
pub const DEFAULT_DECODE_TIMEOUT_SECS: u64 = 10;

/// Default allow-list: SVG plus the common raster formats, so both parse
/// paths are reachable out of the box.
pub fn default_accepted_file_types() -> Vec<String> {
    [
        "image/svg+xml",
        ".svg",
        "image/png",
        "image/jpeg",
        "image/gif",
        "image/webp",
        ".png",
        ".jpg",
        ".jpeg",
        ".gif",
        ".webp",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub accepted_file_types: Option<Vec<String>>,
    #[serde(default)]
    pub drop_text: Option<String>,
    /// Raster decode timeout in seconds; `0` disables the timeout.
    #[serde(default)]
    pub decode_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accepted_file_types: Some(default_accepted_file_types()),
            drop_text: Some(DEFAULT_DROP_TEXT.to_string()),
            decode_timeout_secs: Some(DEFAULT_DECODE_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// The effective allow-list entries.
    #[must_use]
    pub fn accepted_file_types(&self) -> Vec<String> {
        self.accepted_file_types
            .clone()
            .unwrap_or_else(default_accepted_file_types)
    }

    /// The effective drop prompt.
    #[must_use]
    pub fn drop_text(&self) -> String {
        self.drop_text
            .clone()
            .unwrap_or_else(|| DEFAULT_DROP_TEXT.to_string())
    }

    /// The effective decode timeout; `None` when disabled.
    #[must_use]
    pub fn decode_timeout(&self) -> Option<Duration> {
        match self
            .decode_timeout_secs
            .unwrap_or(DEFAULT_DECODE_TIMEOUT_SECS)
        {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
