// SPDX-License-Identifier: MPL-2.0
//! Machine translation port definition.

use futures_util::future::BoxFuture;
use std::fmt;

/// Errors that can occur during a translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The request could not be sent or the connection dropped.
    Transport(String),
    /// The service answered with a non-success status code.
    Status(u16),
    /// The body was not JSON.
    Decode(String),
    /// The body was JSON but had no translated segment where expected.
    MissingSegment,
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::Transport(msg) => write!(f, "Translation request failed: {msg}"),
            TranslationError::Status(code) => write!(f, "Translation returned HTTP {code}"),
            TranslationError::Decode(msg) => write!(f, "Translation body invalid: {msg}"),
            TranslationError::MissingSegment => {
                write!(f, "Translation body has no translated segment")
            }
        }
    }
}

impl std::error::Error for TranslationError {}

/// Port for translating free text into the configured target language.
///
/// The source language is always auto-detected by the service.
pub trait Translator: Send + Sync {
    /// Translates `text`, returning the first translated segment.
    fn translate(&self, text: String) -> BoxFuture<'static, Result<String, TranslationError>>;
}
