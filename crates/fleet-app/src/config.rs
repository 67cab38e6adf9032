//! Configuration management for fleet-manager
//!
//! Config stored at: ~/.config/fleet-manager/config.json

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fleet_types::{OutputFormat, StoreError};

const APP_DIR: &str = "fleet-manager";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self, StoreError> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Directory holding the store file, honoring the override.
    pub fn store_dir(&self) -> PathBuf {
        if let Some(dir) = &self.store_dir {
            return dir.clone();
        }

        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(APP_DIR).join("config.json"))
    }
}
