// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostics report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::events::DiagnosticEventKind;

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// RFC 3339.
    pub generated_at: String,
    pub app_version: String,
    /// RFC 3339.
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// Host details that help reproduce platform-specific issues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
}

impl SystemInfo {
    #[must_use]
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

/// An event with its timestamp made relative to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Per-category event counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub user_actions: usize,
    pub operations: usize,
    pub failed_operations: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut summary = Self::default();
        for event in events {
            match &event.kind {
                DiagnosticEventKind::UserAction { .. } => summary.user_actions += 1,
                DiagnosticEventKind::Operation { operation } => {
                    summary.operations += 1;
                    if !operation.success {
                        summary.failed_operations += 1;
                    }
                }
                DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                DiagnosticEventKind::Error { .. } => summary.errors += 1,
                DiagnosticEventKind::AppState { .. } => {}
            }
        }
        summary
    }
}

/// Complete exported document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub system_info: SystemInfo,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(
        metadata: ReportMetadata,
        system_info: SystemInfo,
        events: Vec<SerializableEvent>,
    ) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            system_info,
            summary,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{AppOperation, Endpoint, ErrorEvent, ErrorType, UserAction};
    use std::time::Duration;

    fn event(kind: DiagnosticEventKind) -> SerializableEvent {
        SerializableEvent {
            timestamp_ms: 0,
            kind,
        }
    }

    #[test]
    fn summary_counts_each_category() {
        let events = vec![
            event(DiagnosticEventKind::UserAction {
                action: UserAction::RefreshComments,
                details: None,
            }),
            event(DiagnosticEventKind::Operation {
                operation: AppOperation::new(Endpoint::ListComments, Duration::ZERO, true),
            }),
            event(DiagnosticEventKind::Operation {
                operation: AppOperation::new(Endpoint::Like, Duration::ZERO, false),
            }),
            event(DiagnosticEventKind::Error {
                event: ErrorEvent::new(ErrorType::NetworkError, "boom"),
            }),
        ];

        let summary = ReportSummary::from_events(&events);

        assert_eq!(
            summary,
            ReportSummary {
                user_actions: 1,
                operations: 2,
                failed_operations: 1,
                warnings: 0,
                errors: 1,
            }
        );
    }

    #[test]
    fn serializable_event_flattens_kind() {
        let value = serde_json::to_value(SerializableEvent {
            timestamp_ms: 12,
            kind: DiagnosticEventKind::UserAction {
                action: UserAction::SubmitComment,
                details: None,
            },
        })
        .expect("serializable");
        assert_eq!(value["timestamp_ms"], 12);
        assert_eq!(value["type"], "user_action");
        assert_eq!(value["action"]["action"], "submit_comment");
    }

    #[test]
    fn relative_timestamp_never_underflows() {
        let later = Instant::now();
        let earlier = later.checked_sub(Duration::from_millis(5)).unwrap_or(later);
        let event = SerializableEvent::new(
            earlier,
            later,
            DiagnosticEventKind::UserAction {
                action: UserAction::SubmitComment,
                details: None,
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }
}
