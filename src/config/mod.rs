// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[i18n]` - Fallback language and an optional catalogue directory
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `LINGUA_NAV_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lingua_nav::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load(None);
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LINGUA_NAV_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Catalogue lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// Locale consulted when a key is missing from the active catalogue.
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,

    /// Directory with `<locale>.ftl` files overriding the embedded ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            fallback_language: default_fallback_language(),
            directory: None,
        }
    }
}

fn default_fallback_language() -> String {
    DEFAULT_FALLBACK_LOCALE.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Resolves the config directory.
///
/// `override_dir` (from `--config-dir`) wins over `LINGUA_NAV_CONFIG_DIR`,
/// which wins over the platform config directory.
pub fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    config_dir(override_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, falling back to defaults.
///
/// Never fails: a missing file yields defaults silently, an unreadable or
/// invalid one yields defaults plus the i18n key of a warning to display.
pub fn load(override_dir: Option<&Path>) -> (Config, Option<&'static str>) {
    let Some(path) = config_path(override_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("Failed to load config from {}: {}", path.display(), err);
            (Config::default(), Some("notification-config-load-error"))
        }
    }
}

pub fn save(config: &Config, override_dir: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(override_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
