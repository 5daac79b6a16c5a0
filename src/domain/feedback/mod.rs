// SPDX-License-Identifier: MPL-2.0
//! Feedback symbols and timing for the transient burst effect.

use std::time::Duration;

/// How long a feedback burst stays on screen.
pub const BURST_LIFETIME: Duration = Duration::from_millis(1200);

/// Symbol shown by a feedback burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Played after a submission or a like.
    Star,
    /// Played after a dislike.
    Sad,
}

impl Symbol {
    /// The grapheme rendered for this symbol.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Star => "⭐",
            Symbol::Sad => "😢",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_single_graphemes() {
        assert_eq!(Symbol::Star.glyph().chars().count(), 1);
        assert_eq!(Symbol::Sad.glyph().chars().count(), 1);
    }

    #[test]
    fn burst_lifetime_is_one_point_two_seconds() {
        assert_eq!(BURST_LIFETIME.as_millis(), 1200);
    }
}
