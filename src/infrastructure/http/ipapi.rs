// SPDX-License-Identifier: MPL-2.0
//! City lookup through an ipapi-compatible endpoint.

use crate::application::port::{CityLocator, LookupError};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;

/// Default lookup endpoint.
pub const DEFAULT_URL: &str = "https://ipapi.co/json/";

/// [`CityLocator`] backed by a JSON endpoint exposing a `city` field.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    client: reqwest::Client,
    url: String,
}

impl IpApiLocator {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl CityLocator for IpApiLocator {
    fn locate(&self) -> BoxFuture<'static, Result<Option<String>, LookupError>> {
        let request = self.client.get(&self.url);
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| LookupError::Transport(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status(status.as_u16()));
            }
            let body = response
                .text()
                .await
                .map_err(|e| LookupError::Transport(e.to_string()))?;
            parse_city(&body)
        }
        .boxed()
    }
}

#[derive(Debug, Deserialize)]
struct LookupBody {
    #[serde(default)]
    city: Option<String>,
}

/// Extracts the `city` field. Absent, null or blank values yield `None`.
///
/// # Errors
///
/// Returns [`LookupError::Decode`] if the body is not a JSON object.
pub fn parse_city(body: &str) -> Result<Option<String>, LookupError> {
    let parsed: LookupBody =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    Ok(parsed.city.filter(|city| !city.trim().is_empty()))
}
