// SPDX-License-Identifier: MPL-2.0
//! User-visible text.
//!
//! Strings live in an embedded Fluent resource so the UI code only deals
//! with message keys. There is a single English catalog.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/strings/"]
struct Asset;

const CATALOG_FILE: &str = "en-US.ftl";
const CATALOG_LOCALE: &str = "en-US";

/// Resolved message catalog.
pub struct Catalog {
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("locale", &CATALOG_LOCALE)
            .finish_non_exhaustive()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}

impl Catalog {
    /// Loads the embedded catalog.
    ///
    /// A missing or malformed resource yields an empty catalog; every lookup
    /// then falls back to `MISSING: <key>`.
    #[must_use]
    pub fn load() -> Self {
        let locale: LanguageIdentifier = CATALOG_LOCALE.parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![locale]);
        // Interpolated values render without bidi isolation marks.
        bundle.set_use_isolating(false);

        if let Some(file) = Asset::get(CATALOG_FILE) {
            let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, _errors)) => resource,
            };
            let _ = bundle.add_resource(resource);
        }

        Self { bundle }
    }

    /// Returns the message for `key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Returns the message for `key` with `args` interpolated.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|msg| msg.value()) else {
            return format!("MISSING: {key}");
        };
        let mut errors = Vec::new();
        self.bundle
            .format_pattern(pattern, args, &mut errors)
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_message() {
        let catalog = Catalog::load();
        assert_eq!(catalog.tr("composer-submit"), "Submit");
        assert_eq!(catalog.tr("composer-placeholder"), "Write your comment...");
    }

    #[test]
    fn interpolates_arguments_without_isolation_marks() {
        let catalog = Catalog::load();
        assert_eq!(
            catalog.tr_with_args("comment-city", &[("city", "Paris")]),
            "City: Paris"
        );
        assert_eq!(
            catalog.tr_with_args("notification-translation-success", &[("text", "hello")]),
            "Translated: hello"
        );
    }

    #[test]
    fn numeric_arguments_render_as_given() {
        let catalog = Catalog::load();
        assert_eq!(
            catalog.tr_with_args("comment-like", &[("count", "2")]),
            "👍 2"
        );
    }

    #[test]
    fn unknown_key_is_marked_missing() {
        let catalog = Catalog::load();
        assert_eq!(catalog.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn every_notification_key_used_in_code_exists() {
        let catalog = Catalog::load();
        for key in [
            "notification-api-not-configured",
            "notification-submit-failed",
            "notification-reaction-failed",
            "notification-translation-failed",
            "notification-diagnostics-exported",
            "notification-diagnostics-export-failed",
            "notification-config-load-error",
            "error-api-transport",
            "error-api-status",
            "error-api-decode",
        ] {
            assert!(!catalog.tr(key).starts_with("MISSING"), "missing key {key}");
        }
    }
}
