//! # Configuration
//!
//! Settings live in `config.json` inside the shelf config directory. Every
//! key is optional; a missing file means defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `library_file` | `<data dir>/library.json` | Where the library is persisted |
//! | `keep_corrupt` | `true` | Move an unreadable library aside before reseeding |
//! | `recent_count` | `3` | Books listed as "recently added" on the dashboard |
//!
//! ## Library File Resolution
//!
//! Highest priority first:
//! 1. `--file` on the command line
//! 2. `SHELF_LIBRARY_FILE` environment variable
//! 3. `library_file` in `config.json`
//! 4. `library.json` in the data directory
//!
//! `SHELF_CONFIG_DIR` and `SHELF_DATA_DIR` override the OS-appropriate
//! directories picked by the `directories` crate.

use crate::error::{Result, ShelfError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const LIBRARY_FILENAME: &str = "library.json";
const DEFAULT_RECENT_COUNT: usize = 3;

pub const ENV_LIBRARY_FILE: &str = "SHELF_LIBRARY_FILE";
pub const ENV_CONFIG_DIR: &str = "SHELF_CONFIG_DIR";
pub const ENV_DATA_DIR: &str = "SHELF_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Override for the library file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_file: Option<PathBuf>,

    /// Move an unreadable library file aside instead of overwriting it
    #[serde(default = "default_keep_corrupt")]
    pub keep_corrupt: bool,

    /// How many books the dashboard shows as recently added
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

fn default_keep_corrupt() -> bool {
    true
}

fn default_recent_count() -> usize {
    DEFAULT_RECENT_COUNT
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            library_file: None,
            keep_corrupt: default_keep_corrupt(),
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    /// Picks the library file, see the module docs for the order.
    pub fn library_file(&self, cli_override: Option<&Path>, data_dir: &Path) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(path) = env_path(ENV_LIBRARY_FILE) {
            return path;
        }
        if let Some(path) = &self.library_file {
            return path.clone();
        }
        data_dir.join(LIBRARY_FILENAME)
    }

    /// Sets a value from its user-facing key (`keep-corrupt`, `recent-count`, `library-file`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "keep-corrupt" => {
                self.keep_corrupt = parse_bool(value).ok_or_else(|| {
                    ShelfError::Api(format!("keep-corrupt expects true or false, got {}", value))
                })?;
            }
            "recent-count" => {
                self.recent_count = value.parse().map_err(|_| {
                    ShelfError::Api(format!("recent-count expects a number, got {}", value))
                })?;
            }
            "library-file" => {
                self.library_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Reads a value by its user-facing key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "keep-corrupt" => Ok(self.keep_corrupt.to_string()),
            "recent-count" => Ok(self.recent_count.to_string()),
            "library-file" => Ok(self
                .library_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["library-file", "keep-corrupt", "recent-count"]
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::Api(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        ShelfConfig::keys().join(", ")
    ))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Directories shelf reads its config from and keeps its data in.
#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl ShelfPaths {
    pub fn discover() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "shelf", "shelf");

        let config_dir = match env_path(ENV_CONFIG_DIR) {
            Some(dir) => dir,
            None => project_dirs
                .as_ref()
                .map(|d| d.config_dir().to_path_buf())
                .ok_or_else(|| ShelfError::Store("Could not determine config dir".into()))?,
        };
        let data_dir = match env_path(ENV_DATA_DIR) {
            Some(dir) => dir,
            None => project_dirs
                .as_ref()
                .map(|d| d.data_dir().to_path_buf())
                .ok_or_else(|| ShelfError::Store("Could not determine data dir".into()))?,
        };

        Ok(Self {
            config_dir,
            data_dir,
        })
    }
}
