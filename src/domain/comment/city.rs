// SPDX-License-Identifier: MPL-2.0
//! Detected city value object.

use std::fmt;

/// City used whenever the lookup fails or reports nothing usable.
pub const UNKNOWN_CITY: &str = "Unknown";

/// Best-effort city name resolved once per session.
///
/// Never empty: blank lookups collapse to [`UNKNOWN_CITY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedCity(String);

impl DetectedCity {
    /// Creates a city from a lookup value, falling back to `Unknown` when blank.
    ///
    /// Non-blank values are kept exactly as the lookup reported them.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            Self::unknown()
        } else {
            Self(name)
        }
    }

    /// The fallback city.
    #[must_use]
    pub fn unknown() -> Self {
        Self(UNKNOWN_CITY.to_string())
    }

    /// Resolves an optional lookup field.
    #[must_use]
    pub fn from_lookup(city: Option<String>) -> Self {
        city.map_or_else(Self::unknown, Self::new)
    }

    /// Returns whether this is the fallback value.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_CITY
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DetectedCity {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for DetectedCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lookup_field_is_unknown() {
        assert!(DetectedCity::from_lookup(None).is_unknown());
    }

    #[test]
    fn blank_lookup_field_is_unknown() {
        assert!(DetectedCity::from_lookup(Some(String::new())).is_unknown());
        assert!(DetectedCity::from_lookup(Some("  ".into())).is_unknown());
    }

    #[test]
    fn present_lookup_field_is_kept() {
        let city = DetectedCity::from_lookup(Some("Lyon".into()));
        assert_eq!(city.as_str(), "Lyon");
        assert!(!city.is_unknown());
    }

    #[test]
    fn lookup_value_is_not_trimmed() {
        let city = DetectedCity::from_lookup(Some(" Saint-Denis ".into()));
        assert_eq!(city.as_str(), " Saint-Denis ");
    }
}
