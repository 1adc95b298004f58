//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::info;

use crate::constants::{ENV_BACKEND_URL, ENV_TIMEOUT_MS};
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

const CONFIG_FILE: &str = "config.toml";

/// Get (and create) the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "nightlights", "night-lights").ok_or_else(|| {
        Error::Invalid {
            message: "Could not determine a home directory for configuration".to_string(),
        }
    })?;
    let dir = dirs.config_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load the configuration from the platform config directory, apply
/// environment overrides and validate it
pub fn load_config() -> Result<AppConfig> {
    let path = config_dir()?.join(CONFIG_FILE);
    let config = load_config_from(&path)?;
    let config = apply_env_overrides(config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Load a TOML config file, writing defaults first if it does not exist
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        save_config_to(path, &config)?;
        info!("Wrote default configuration to {}", path.display());
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Save a TOML config file
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Override file values from the environment (`lookup` is `std::env::var` in
/// production)
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig> {
    if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
        config.backend_url = url.trim().to_string();
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
        config.request_timeout_ms = raw.trim().parse().map_err(|_| Error::Invalid {
            message: format!("{ENV_TIMEOUT_MS} must be a number of milliseconds, got {raw:?}"),
        })?;
    }
    Ok(config)
}
