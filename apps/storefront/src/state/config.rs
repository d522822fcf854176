//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`storefront.toml`)
//! 3. Environment variables (`STOREFRONT_*`)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Sweetshop Downtown"
//! notification_dismiss_ms = 1500
//! catalog_path = "/srv/sweetshop/catalog.json"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::AppError;

/// How long the "added to cart" banner stays up by default.
pub const DEFAULT_NOTIFICATION_DISMISS_MS: u64 = 1500;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Store name (shown in the shell banner)
    pub store_name: String,

    /// Banner auto-dismiss interval in milliseconds
    pub notification_dismiss_ms: u64,

    /// JSON catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Sweetshop".to_string(),
            notification_dismiss_ms: DEFAULT_NOTIFICATION_DISMISS_MS,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.notification_dismiss_ms == 0 {
            return Err(AppError::InvalidConfig(
                "notification_dismiss_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Banner auto-dismiss interval.
    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `STOREFRONT_*` overrides from `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(ms) = lookup("STOREFRONT_NOTIFICATION_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => {
                    debug!(ms, "Overriding notification interval from environment");
                    self.notification_dismiss_ms = ms;
                }
                Err(_) => warn!(value = %ms, "Ignoring invalid STOREFRONT_NOTIFICATION_MS"),
            }
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog_path = Some(PathBuf::from(path));
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sweetshop", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.notification_dismiss(), Duration::from_millis(1500));
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConfigState = toml::from_str(r#"store_name = "Mithai Corner""#).unwrap();
        assert_eq!(config.store_name, "Mithai Corner");
        assert_eq!(config.notification_dismiss_ms, DEFAULT_NOTIFICATION_DISMISS_MS);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOREFRONT_STORE_NAME", "Halwai"),
            ("STOREFRONT_NOTIFICATION_MS", "250"),
            ("STOREFRONT_CATALOG", "/tmp/catalog.json"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigState::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Halwai");
        assert_eq!(config.notification_dismiss_ms, 250);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_invalid_override_is_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(|key| {
            (key == "STOREFRONT_NOTIFICATION_MS").then(|| "soon".to_string())
        });
        assert_eq!(config.notification_dismiss_ms, DEFAULT_NOTIFICATION_DISMISS_MS);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = ConfigState {
            notification_dismiss_ms: 0,
            ..ConfigState::default()
        };
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }
}
