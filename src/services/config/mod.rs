use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Location of `config.toml` in the platform config directory
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "LunaYoga", "LunaYoga")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load config from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid config in {}: {}", path.display(), e))?;

    Ok(config)
}

/// Load the user's config, falling back to defaults on any problem
pub fn load_config_or_default() -> AppConfig {
    let Some(path) = config_path() else {
        log::warn!("Unable to resolve config directory; using default config");
        return AppConfig::default();
    };

    match load_config(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{:#}, using defaults", e);
            AppConfig::default()
        }
    }
}
