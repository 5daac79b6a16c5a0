// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override**: parameter to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`), set via [`init_cli_overrides`]
//! 3. **Environment variables** (`COMMENT_WALL_DATA_DIR`, `COMMENT_WALL_CONFIG_DIR`)
//! 4. **Platform default** via the `dirs` crate, with the app name appended
//!
//! The config directory holds `settings.toml`; the data directory receives
//! exported diagnostics reports.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config/data roots.
const APP_NAME: &str = "CommentWall";

pub const ENV_DATA_DIR: &str = "COMMENT_WALL_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "COMMENT_WALL_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call has an effect; later calls return `false`.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    data_set && config_set
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_root: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    platform_root.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory for exported diagnostics reports.
///
/// Linux: `~/.local/share/CommentWall/`, macOS:
/// `~/Library/Application Support/CommentWall/`, Windows:
/// `%APPDATA%\CommentWall\`.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}
