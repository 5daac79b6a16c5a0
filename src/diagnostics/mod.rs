// SPDX-License-Identifier: MPL-2.0
//! Developer-facing diagnostics.
//!
//! Remote failures that the user never sees (a failed list refresh, an
//! unreachable geolocation service) are recorded here instead of being
//! printed. Events live in a memory-bounded ring buffer and can be exported
//! as a JSON report.
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: buffer owner and its
//!   cloneable, non-blocking sender
//! - [`DiagnosticEvent`]: user actions, remote operations, warnings, errors
//!
//! # Privacy
//!
//! Comment text is never logged. Free-form messages go through
//! [`sanitize_message`], which strips URL query strings and home paths.

mod buffer;
mod collector;
mod events;
mod export;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppOperation, AppStateEvent, DiagnosticEvent, DiagnosticEventKind, Endpoint, ErrorEvent,
    ErrorType, UserAction, WarningEvent, WarningType,
};
pub use export::{generate_default_filename, report_path, write_atomic, ExportError};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent, SystemInfo};
pub use sanitizer::sanitize_message;
