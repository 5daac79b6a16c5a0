// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Frame interval while a feedback burst is animating.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Interval when idle: toast expiry and diagnostics draining only.
pub const IDLE_TICK: Duration = Duration::from_millis(250);

/// Picks the tick interval for the current state.
#[must_use]
pub fn tick_interval(animating: bool) -> Duration {
    if animating {
        ANIMATION_TICK
    } else {
        IDLE_TICK
    }
}

pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    time::every(tick_interval(animating)).map(Message::Tick)
}

pub fn create_window_subscription() -> Subscription<Message> {
    window::open_events().map(Message::WindowOpened)
}
