// SPDX-License-Identifier: MPL-2.0
//! Geolocation-by-IP port definition.

use futures_util::future::BoxFuture;
use std::fmt;

/// Errors that can occur during a city lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request could not be sent or the connection dropped.
    Transport(String),
    /// The service answered with a non-success status code.
    Status(u16),
    /// The response body was not the expected JSON object.
    Decode(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Transport(msg) => write!(f, "City lookup failed: {msg}"),
            LookupError::Status(code) => write!(f, "City lookup returned HTTP {code}"),
            LookupError::Decode(msg) => write!(f, "City lookup body invalid: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Port for resolving the visitor's city from their public IP.
pub trait CityLocator: Send + Sync {
    /// Performs one lookup.
    ///
    /// `Ok(None)` means the service answered but reported no city.
    fn locate(&self) -> BoxFuture<'static, Result<Option<String>, LookupError>>;
}
