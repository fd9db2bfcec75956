// ABOUTME: Configuration management for the merchant console
// Handles the application config file and the durable seller session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub mod session;

pub use session::StoredSession;

/// Default aggregator base URL.
fn default_api_base_url() -> String {
    "https://aggregator.gobbl.ai/api/shopify".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_tick_rate_ms() -> u64 {
    250
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Base URL of the storefront aggregator API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// UI tick interval in milliseconds (drives the saved-indicator expiry)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether to show the seller-info strip under the dashboard tabs
    #[serde(default = "default_true")]
    pub show_seller_info: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_seller_info: default_true(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration, merging files in order of precedence.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        for path in Self::config_paths() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;

                let file_config: AppConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;

                config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Save configuration to the user config directory.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::user_config_dir()?;
        fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file paths in order of precedence.
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".shoptalk").join("config.toml"));
        }

        // 2. User config (~/.shoptalk/config.toml)
        if let Ok(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        paths
    }

    /// User configuration directory (~/.shoptalk).
    pub fn user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".shoptalk"))
    }

    fn merge(&mut self, other: AppConfig) {
        // Don't override version
        if other.api_base_url != default_api_base_url() {
            self.api_base_url = other.api_base_url;
        }
        self.request_timeout_secs = other.request_timeout_secs;
        self.ui_preferences = other.ui_preferences;
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui_preferences.tick_rate_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.api_base_url, "https://aggregator.gobbl.ai/api/shopify");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_merge_keeps_defaults_when_absent() {
        let mut base = AppConfig::default();
        let overlay: AppConfig =
            toml::from_str("api_base_url = \"https://staging.example/api\"").unwrap();
        base.merge(overlay);
        assert_eq!(base.api_base_url, "https://staging.example/api");
        assert!(base.ui_preferences.show_seller_info);
    }
}
