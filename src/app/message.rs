// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::flow::Outcome;
use crate::ui::notifications;
use crate::ui::wall;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Wall(wall::Message),
    /// A remote flow finished.
    Completed(Outcome),
    Notification(notifications::NotificationMessage),
    /// The main window exists; feedback bursts can be drawn from now on.
    WindowOpened(window::Id),
    /// Periodic tick: animation frames, toast expiry, diagnostics draining.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Comment service base URL. Takes precedence over `COMMENT_WALL_API_URL`
    /// and the settings file.
    pub api_url: Option<String>,
    /// Optional data directory override (diagnostics exports).
    /// Takes precedence over `COMMENT_WALL_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COMMENT_WALL_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
