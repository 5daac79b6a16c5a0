// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns the ring buffer. Code that cannot borrow it (async
//! tasks, detached helpers) logs through a [`DiagnosticsHandle`], whose
//! events are moved into the buffer on the next [`process_pending`] call.
//!
//! [`process_pending`]: DiagnosticsCollector::process_pending

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::{write_atomic, ExportError};
use super::report::{DiagnosticReport, ReportMetadata, SerializableEvent, SystemInfo};
use super::{
    sanitize_message, AppOperation, AppStateEvent, BufferCapacity, CircularBuffer,
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};

/// Bounded so a stalled UI thread cannot grow memory without limit.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Cloneable, non-blocking sender of diagnostic events.
///
/// Events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_operation(&self, operation: AppOperation) {
        self.send(DiagnosticEventKind::Operation { operation });
    }

    /// The message is sanitized before sending.
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning {
            event: WarningEvent {
                message: sanitize_message(&event.message),
                ..event
            },
        });
    }

    /// The message is sanitized before sending.
    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error {
            event: ErrorEvent {
                message: sanitize_message(&event.message),
                ..event
            },
        });
    }
}

/// Central store for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic, for relative event timestamps.
    collection_started_at: Instant,
    /// Wall clock, for the report header.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Called on every UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.push(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_state(&mut self, state: AppStateEvent) {
        self.push(DiagnosticEventKind::AppState { state });
    }

    pub fn log_operation(&mut self, operation: AppOperation) {
        self.push(DiagnosticEventKind::Operation { operation });
    }

    pub fn log_warning(&mut self, event: WarningEvent) {
        self.push(DiagnosticEventKind::Warning {
            event: WarningEvent {
                message: sanitize_message(&event.message),
                ..event
            },
        });
    }

    pub fn log_error(&mut self, event: ErrorEvent) {
        self.push(DiagnosticEventKind::Error {
            event: ErrorEvent {
                message: sanitize_message(&event.message),
                ..event
            },
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );
        DiagnosticReport::new(metadata, SystemInfo::collect(), events)
    }

    /// Renders the current buffer as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the report atomically to `path`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if file operations fail and
    /// `ExportError::Serialization` if JSON serialization fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
