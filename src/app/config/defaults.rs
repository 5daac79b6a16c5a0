// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

pub use crate::domain::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX as MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN as MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

// ==========================================================================
// Remote Services
// ==========================================================================

/// City lookup endpoint.
pub const DEFAULT_GEOLOCATION_URL: &str = crate::infrastructure::http::ipapi::DEFAULT_URL;

/// Translation endpoint.
pub const DEFAULT_TRANSLATION_URL: &str =
    crate::infrastructure::http::google_translate::DEFAULT_URL;

/// Language comments are translated into.
pub const DEFAULT_TRANSLATION_TARGET: &str =
    crate::infrastructure::http::google_translate::DEFAULT_TARGET;

/// Environment variable supplying the comment service base URL.
pub const ENV_API_URL: &str = "COMMENT_WALL_API_URL";

// ==========================================================================
// Window
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_respect_minimums() {
        assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn diagnostics_bounds_are_ordered() {
        assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
