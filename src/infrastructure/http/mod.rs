// SPDX-License-Identifier: MPL-2.0
//! HTTP adapters for the remote ports.
//!
//! All adapters share one `reqwest::Client` so connections are pooled across
//! the comment service, the geolocation lookup and the translation service.

pub mod comment_api;
pub mod google_translate;
pub mod ipapi;

pub use comment_api::RestCommentApi;
pub use google_translate::GoogleTranslator;
pub use ipapi::IpApiLocator;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!("CommentWall/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
}

/// Removes trailing slashes so endpoint paths can be appended verbatim.
#[must_use]
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://api.example.com//"),
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn normalize_treats_blank_as_unset() {
        assert_eq!(normalize_base_url(""), None);
        assert_eq!(normalize_base_url("  "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn user_agent_names_the_crate_version() {
        assert!(USER_AGENT.starts_with("CommentWall/"));
    }
}
