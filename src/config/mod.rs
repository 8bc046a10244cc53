// SPDX-License-Identifier: MPL-2.0
//! This module handles the backoffice configuration stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[api]` - Backend base URL
//! - `[notifications]` - Toast duration and stacking cap
//! - `[orders]` - Search debounce and row highlight timing
//!
//! Every field is optional on disk; missing values fall back to the constants
//! in [`defaults`], and out-of-range values are clamped when read through the
//! accessor methods.
//!
//! # Examples
//!
//! ```no_run
//! use pedidos_backoffice::config;
//!
//! let (mut config, _warning) = config::load();
//! config.api.base_url = Some("https://pedidos.example.com/api".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Backend connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Toast notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

/// Orders page settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrdersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_debounce_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_ms: Option<u64>,
}

/// Full contents of `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub orders: OrdersConfig,
}

impl Config {
    /// Backend base URL without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.api
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        let ms = self
            .notifications
            .duration_ms
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS)
            .clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn max_visible_notifications(&self) -> usize {
        self.notifications
            .max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE_NOTIFICATIONS)
            .clamp(MIN_MAX_VISIBLE_NOTIFICATIONS, MAX_MAX_VISIBLE_NOTIFICATIONS)
    }

    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        let ms = self
            .orders
            .search_debounce_ms
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
            .min(MAX_SEARCH_DEBOUNCE_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn highlight_duration(&self) -> Duration {
        let ms = self
            .orders
            .highlight_ms
            .unwrap_or(DEFAULT_HIGHLIGHT_MS)
            .min(MAX_HIGHLIGHT_MS);
        Duration::from_millis(ms)
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config plus an optional warning meant for a toast. A missing
/// file is not a warning; an unreadable or malformed one is.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir/settings.toml` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings.toml ignored");
            (
                Config::default(),
                Some(format!(
                    "No se pudo leer la configuración; usando valores por defecto ({err})"
                )),
            )
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            api: ApiConfig {
                base_url: Some("https://pedidos.example.com/api".into()),
            },
            notifications: NotificationsConfig {
                duration_ms: Some(5000),
                max_visible: Some(3),
            },
            orders: OrdersConfig {
                search_debounce_ms: Some(150),
                highlight_ms: None,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn defaults_match_documented_behavior() {
        let config = Config::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.notification_duration(), Duration::from_millis(3000));
        assert_eq!(config.max_visible_notifications(), 4);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.highlight_duration(), Duration::from_millis(2500));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            notifications: NotificationsConfig {
                duration_ms: Some(1),
                max_visible: Some(0),
            },
            orders: OrdersConfig {
                search_debounce_ms: Some(99_999),
                highlight_ms: Some(99_999),
            },
            ..Config::default()
        };

        assert_eq!(
            config.notification_duration(),
            Duration::from_millis(MIN_NOTIFICATION_DURATION_MS)
        );
        assert_eq!(config.max_visible_notifications(), 1);
        assert_eq!(
            config.search_debounce(),
            Duration::from_millis(MAX_SEARCH_DEBOUNCE_MS)
        );
        assert_eq!(
            config.highlight_duration(),
            Duration::from_millis(MAX_HIGHLIGHT_MS)
        );
    }

    #[test]
    fn api_base_url_strips_trailing_slash_and_ignores_blank() {
        let mut config = Config::default();
        config.api.base_url = Some("https://x.test/api/".into());
        assert_eq!(config.api_base_url(), "https://x.test/api");

        config.api.base_url = Some("   ".into());
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn corrupted_file_loads_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some());
        assert_eq!(config, Config::default());
    }
}
