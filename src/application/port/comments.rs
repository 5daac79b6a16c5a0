// SPDX-License-Identifier: MPL-2.0
//! Comment service port definition.
//!
//! The comment service owns the comment collection and the like/dislike
//! counters. The client reads the full collection and sends single-shot
//! mutations; it never computes counters itself.

use crate::domain::comment::{Comment, CommentId, NewComment, Reaction};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// ApiError
// =============================================================================

/// Errors that can occur while talking to the comment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No base URL was configured; the service is unreachable by design.
    NotConfigured,
    /// The request could not be sent or the connection dropped.
    Transport(String),
    /// The service answered with a non-success status code.
    Status(u16),
    /// The response body could not be decoded.
    Decode(String),
}

impl ApiError {
    /// Returns the message key used for user-facing notifications.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            ApiError::NotConfigured => "notification-api-not-configured",
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Status(_) => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotConfigured => write!(f, "Comment API base URL is not configured"),
            ApiError::Transport(msg) => write!(f, "Request failed: {msg}"),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {code}"),
            ApiError::Decode(msg) => write!(f, "Invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// CommentApi Trait
// =============================================================================

/// Port for the remote comment collection.
///
/// Every call is a single independent request. Futures are boxed and
/// `'static` so callers can hand them to Iced's `Task::perform` without
/// borrowing the adapter.
pub trait CommentApi: Send + Sync {
    /// Fetches the whole comment collection, in service order.
    fn list(&self) -> BoxFuture<'static, Result<Vec<Comment>, ApiError>>;

    /// Creates a comment. The response body is ignored.
    fn create(&self, comment: NewComment) -> BoxFuture<'static, Result<(), ApiError>>;

    /// Sends a like or dislike for the given comment.
    fn react(&self, id: CommentId, reaction: Reaction)
        -> BoxFuture<'static, Result<(), ApiError>>;
}
