// SPDX-License-Identifier: MPL-2.0
//! Application configuration stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[api]` - Comment service base URL
//! - `[services]` - Geolocation and translation endpoints
//! - `[diagnostics]` - Event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` or `COMMENT_WALL_CONFIG_DIR`
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use comment_wall::app::config;
//!
//! let (config, _warning) = config::load();
//! let base_url = config::resolve_api_base_url(None, &config);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::error::Result;
use crate::infrastructure::http::normalize_base_url;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Comment service root, e.g. `https://comments.example.com/api`.
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServicesConfig {
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    #[serde(default = "default_translation_url")]
    pub translation_url: String,

    /// Target language code passed to the translation service.
    #[serde(default = "default_translation_target")]
    pub translation_target: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            geolocation_url: default_geolocation_url(),
            translation_url: default_translation_url(),
            translation_target: default_translation_target(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of retained events, clamped to the supported range.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub services: ServicesConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_geolocation_url() -> String {
    DEFAULT_GEOLOCATION_URL.to_string()
}

fn default_translation_url() -> String {
    DEFAULT_TRANSLATION_URL.to_string()
}

fn default_translation_target() -> String {
    DEFAULT_TRANSLATION_TARGET.to_string()
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Base URL Resolution
// =============================================================================

/// Resolves the comment service base URL.
///
/// Priority: `cli` (`--api-url`), then `COMMENT_WALL_API_URL`, then
/// `[api] base_url`. Blank values are skipped and trailing `/` removed.
/// `None` means the comment flows are disabled.
#[must_use]
pub fn resolve_api_base_url(cli: Option<&str>, config: &Config) -> Option<String> {
    let env = std::env::var(ENV_API_URL).ok();
    // Bound to a local so the iterator temporaries drop before `env`.
    let resolved = [cli, env.as_deref(), config.api.base_url.as_deref()]
        .into_iter()
        .flatten()
        .find_map(normalize_base_url);
    resolved
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, warning_key)`. A missing file yields defaults silently;
/// an unreadable one yields defaults plus a notification key.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
