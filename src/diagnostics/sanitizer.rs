// SPDX-License-Identifier: MPL-2.0
//! Scrubbing of free-form diagnostic messages.
//!
//! Transport errors quote the request URL, and the translation URL carries
//! the comment text in its query string. Query strings and home-directory
//! paths are replaced with placeholders before anything reaches the buffer.

use std::sync::LazyLock;

use regex::Regex;

static QUERY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"\?[^\s"'()\[\]]*"#).ok());

static PATH_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"("#,
        r#"/home/[^\s"'()\[\]]+"#,
        r#"|/Users/[^\s"'()\[\]]+"#,
        r#"|~/[^\s"'()\[\]]+"#,
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#,
        r#")"#,
    ))
    .ok()
});

/// Replaces URL query strings with `?<query>` and user paths with `<path>`.
///
/// ```
/// use comment_wall::diagnostics::sanitize_message;
///
/// let msg = "error sending request for url (https://t.example/single?q=secret)";
/// assert_eq!(
///     sanitize_message(msg),
///     "error sending request for url (https://t.example/single?<query>)"
/// );
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let mut sanitized = message.to_string();
    if let Some(pattern) = QUERY_PATTERN.as_ref() {
        sanitized = pattern.replace_all(&sanitized, "?<query>").into_owned();
    }
    if let Some(pattern) = PATH_PATTERN.as_ref() {
        sanitized = pattern.replace_all(&sanitized, "<path>").into_owned();
    }
    sanitized
}
