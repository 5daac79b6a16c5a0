// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events record what the user did and how the remote calls behaved, so a
//! report can explain why the wall looked the way it did. Comment text is
//! never recorded; only identifiers and outcomes.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::application::board::RemoteCall;
use crate::domain::comment::Reaction;

/// User-initiated actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    SubmitComment,
    LikeComment { comment_id: String },
    DislikeComment { comment_id: String },
    TranslateComment { comment_id: String },
    RefreshComments,
    ExportDiagnostics,
}

/// Remote endpoints a [`AppOperation`] can refer to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    ListComments,
    CreateComment,
    Like,
    Dislike,
    LocateCity,
    Translate,
}

impl From<RemoteCall> for Endpoint {
    fn from(call: RemoteCall) -> Self {
        match call {
            RemoteCall::ListComments => Endpoint::ListComments,
            RemoteCall::CreateComment => Endpoint::CreateComment,
            RemoteCall::React(Reaction::Like) => Endpoint::Like,
            RemoteCall::React(Reaction::Dislike) => Endpoint::Dislike,
            RemoteCall::LocateCity => Endpoint::LocateCity,
            RemoteCall::Translate => Endpoint::Translate,
        }
    }
}

/// A completed remote flow with its wall-clock duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppOperation {
    pub endpoint: Endpoint,
    pub duration_ms: u64,
    pub success: bool,
}

impl AppOperation {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(endpoint: Endpoint, duration: Duration, success: bool) -> Self {
        Self {
            endpoint,
            duration_ms: duration.as_millis() as u64,
            success,
        }
    }
}

/// Application lifecycle milestones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    Started { api_configured: bool },
    WindowOpened,
    CityResolved { known: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    NetworkError,
    ConfigurationIssue,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    NetworkError,
    ExportError,
    Other,
}

/// A non-fatal problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
            endpoint: None,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }
}

/// A failed operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            endpoint: None,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic, for relative timestamps in reports.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    AppState {
        state: AppStateEvent,
    },
    Operation {
        operation: AppOperation,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}
