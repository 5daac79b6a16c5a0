// SPDX-License-Identifier: MPL-2.0
//! Comment domain types.
//!
//! Comments are owned by the remote comment service. The client only ever
//! holds read-through copies, so these types carry no mutation methods for the
//! counters: likes and dislikes are whatever the last snapshot reported.

mod city;
mod reaction;

pub use city::{DetectedCity, UNKNOWN_CITY};
pub use reaction::Reaction;

use std::fmt;

/// Placeholder author identifier attached to every submission.
///
/// There is no authentication, so every visitor posts as the same guest.
pub const GUEST_USER_ID: &str = "guest";

/// Server-assigned comment identifier.
///
/// Opaque to the client: it is only compared and echoed back in reaction
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentId(String);

impl CommentId {
    /// Wraps a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommentId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A comment as last reported by the comment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub city: String,
    pub likes: u64,
    pub dislikes: u64,
}

/// Payload of a comment creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// The text exactly as typed (validation trims only to decide emptiness).
    pub text: String,
    /// City attached to the submission.
    pub city: DetectedCity,
    /// Author identifier, always [`GUEST_USER_ID`].
    pub user_id: String,
}

impl NewComment {
    /// Builds a submission from raw draft text.
    ///
    /// Returns `None` when the draft is empty or whitespace-only.
    #[must_use]
    pub fn from_draft(draft: &str, city: DetectedCity) -> Option<Self> {
        if draft.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: draft.to_string(),
            city,
            user_id: GUEST_USER_ID.to_string(),
        })
    }
}
