// SPDX-License-Identifier: MPL-2.0
//! Translation through the public `translate_a/single` endpoint.

use crate::application::port::{TranslationError, Translator};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::Value;

/// Default endpoint.
pub const DEFAULT_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Default target language.
pub const DEFAULT_TARGET: &str = "en";

/// [`Translator`] with auto-detected source language.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    url: String,
    target: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, url: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            target: target.into(),
        }
    }

    fn request(&self, text: &str) -> reqwest::RequestBuilder {
        self.client.get(&self.url).query(&[
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", self.target.as_str()),
            ("dt", "t"),
            ("q", text),
        ])
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: String) -> BoxFuture<'static, Result<String, TranslationError>> {
        let request = self.request(&text);
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| TranslationError::Transport(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(TranslationError::Status(status.as_u16()));
            }
            let body = response
                .text()
                .await
                .map_err(|e| TranslationError::Transport(e.to_string()))?;
            parse_translation(&body)
        }
        .boxed()
    }
}

/// Extracts the first translated segment, found at `body[0][0][0]`.
///
/// # Errors
///
/// Returns [`TranslationError::Decode`] for non-JSON bodies and
/// [`TranslationError::MissingSegment`] when the nested string is absent.
pub fn parse_translation(body: &str) -> Result<String, TranslationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| TranslationError::Decode(e.to_string()))?;
    value
        .get(0)
        .and_then(|sentences| sentences.get(0))
        .and_then(|sentence| sentence.get(0))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(TranslationError::MissingSegment)
}
