// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::application::board::{Notice, NoticeKind};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s).
    #[default]
    Success,
    /// Something is missing but the wall still works (orange, 5s).
    Warning,
    /// A remote call failed (red, manual dismiss).
    Error,
}

impl Severity {
    /// Accent color of the toast.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph shown in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }

    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast waiting to be shown or currently on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Catalog key of the message.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    /// When the toast entered the visible stack. Auto-dismiss counts from here.
    shown_at: Instant,
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    #[must_use]
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: now,
            shown_at: now,
            custom_dismiss_duration: None,
        }
    }

    #[must_use]
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    #[must_use]
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    #[must_use]
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a message argument.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the severity's display duration. Applies to errors too.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Restarts the display timer; called when a queued toast becomes visible.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at = now;
    }

    /// Whether both notifications would render the same text with the same severity.
    #[must_use]
    pub fn same_content(&self, other: &Notification) -> bool {
        self.severity == other.severity
            && self.message_key == other.message_key
            && self.message_args == other.message_args
    }

    /// Whether the notification has been visible long enough to go away on its own.
    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
            .is_some_and(|duration| now.saturating_duration_since(self.shown_at) >= duration)
    }
}

impl From<Notice> for Notification {
    fn from(notice: Notice) -> Self {
        let severity = match notice.kind {
            NoticeKind::Success => Severity::Success,
            NoticeKind::Error => Severity::Error,
        };
        let mut notification = Notification::new(severity, notice.message_key);
        notification.message_args = notice.args;
        notification.custom_dismiss_duration = notice.display_for;
        notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Warning.color());
        assert_ne!(Severity::Success.color(), Severity::Error.color());
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        let error = Notification::error("boom");
        assert!(!error.should_auto_dismiss(error.created_at() + Duration::from_secs(3600)));
    }

    #[test]
    fn success_dismisses_after_three_seconds() {
        let notification = Notification::success("ok");
        let start = notification.created_at();
        assert!(!notification.should_auto_dismiss(start + Duration::from_millis(2999)));
        assert!(notification.should_auto_dismiss(start + Duration::from_secs(3)));
    }

    #[test]
    fn custom_duration_overrides_severity_default() {
        let notification = Notification::success("ok").auto_dismiss(Duration::from_secs(8));
        let start = notification.created_at();
        assert!(!notification.should_auto_dismiss(start + Duration::from_secs(5)));
        assert!(notification.should_auto_dismiss(start + Duration::from_secs(8)));
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("test-error")
            .with_arg("reason", "offline")
            .with_arg("code", "503");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "test-error");
        assert_eq!(notification.message_args().len(), 2);
    }

    #[test]
    fn notice_converts_with_kind_args_and_duration() {
        let notice = Notice {
            kind: NoticeKind::Success,
            message_key: "notification-translation-success",
            args: vec![("text".to_string(), "hello".to_string())],
            display_for: Some(Duration::from_secs(8)),
        };

        let notification = Notification::from(notice);

        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(
            notification.message_key(),
            "notification-translation-success"
        );
        assert_eq!(
            notification.message_args(),
            &[("text".to_string(), "hello".to_string())]
        );
        let start = notification.created_at();
        assert!(!notification.should_auto_dismiss(start + Duration::from_secs(4)));
    }

    #[test]
    fn error_notice_becomes_error_notification() {
        let notice = Notice {
            kind: NoticeKind::Error,
            message_key: "notification-translation-failed",
            args: Vec::new(),
            display_for: None,
        };
        assert_eq!(Notification::from(notice).severity(), Severity::Error);
    }
}
