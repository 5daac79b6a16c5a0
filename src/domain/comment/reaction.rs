// SPDX-License-Identifier: MPL-2.0
//! Like/dislike reactions.

use crate::domain::feedback::Symbol;

/// A reaction a visitor can send for a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    /// Path segment used by the comment service (`/comment/{segment}/{id}`).
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        }
    }

    /// Feedback symbol played once the reaction went through.
    #[must_use]
    pub fn symbol(self) -> Symbol {
        match self {
            Reaction::Like => Symbol::Star,
            Reaction::Dislike => Symbol::Sad,
        }
    }
}
