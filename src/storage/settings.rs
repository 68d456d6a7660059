//! Configuration storage
//!
//! Loads and saves the application configuration file.

use crate::storage::{get_data_dir, StorageError};
use crate::types::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config file path
fn get_config_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("config.json"))
}

/// Load configuration from disk
///
/// Returns the default configuration if the file doesn't exist or is corrupted
pub fn load_config() -> AppConfig {
    let loaded = get_config_path().and_then(|path| load_config_from(&path));
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

/// Load configuration from `path` with error propagation
///
/// A missing file is created with the defaults so it can be edited.
pub fn load_config_from(path: &Path) -> Result<AppConfig, StorageError> {
    if !path.exists() {
        tracing::info!("Config file not found, writing defaults to {}", path.display());
        let config = AppConfig::default();
        save_config_to(path, &config)?;
        return Ok(config);
    }

    let json = fs::read_to_string(path)?;
    let mut config: AppConfig = serde_json::from_str(&json)?;
    config.validate();

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save configuration to `path`
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;

    tracing::debug!("Saved config to disk");
    Ok(())
}
