//! Application configuration file

use std::collections::HashMap;
use std::path::Path;

use pane_router_core::error::{CoreError, CoreResult};
use pane_router_core::types::NavigationSettings;
use serde::{Deserialize, Serialize};

/// Contents of the JSON configuration file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub navigation: NavigationSettings,

    /// Address navigated to by `AppState::run_startup`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_address: Option<String>,

    /// Localized strings served by `StaticResourceProvider`
    #[serde(default)]
    pub resources: HashMap<String, String>,
}

impl AppConfig {
    /// Load the configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// a [`CoreError::ConfigError`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::info!("配置文件不存在，使用默认配置: {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::ConfigError(format!("invalid config: {e}")))
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| {
            CoreError::ConfigError(format!("failed to write {}: {e}", path.display()))
        })
    }
}
