//! Application configuration
//!
//! A small toml file under the app directory pointing the client at the
//! remote API. A missing file yields the defaults; the command layer applies
//! the SKILLBRIDGE_API_URL environment override on top.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

const CONFIG_FILE: &str = "config.toml";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the SkillBridge API
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_string() }
    }
}

/// Load configuration from the app directory, falling back to defaults
/// when no config file exists yet.
pub fn load_config(app_dir: &Path) -> Result<AppConfig> {
    let config_path = app_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to the app directory
pub fn save_config(config: &AppConfig, app_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(app_dir)?;
    let content = toml::to_string_pretty(config)?;
    std::fs::write(app_dir.join(CONFIG_FILE), content)?;
    Ok(())
}
