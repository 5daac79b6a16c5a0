// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of the HTTP client.
//!
//! # Available Ports
//!
//! - [`comments`]: The remote comment collection (list, create, react)
//! - [`geolocation`]: City lookup by public IP
//! - [`translation`]: Machine translation of a comment's text
//!
//! # Design Notes
//!
//! - Methods return `BoxFuture<'static, _>` so callers can wrap them in Iced
//!   `Task`s without borrowing the adapter
//! - Traits are `Send + Sync`; adapters are shared behind `Arc`
//! - Each port has its own error type

pub mod comments;
pub mod geolocation;
pub mod translation;

pub use comments::{ApiError, CommentApi};
pub use geolocation::{CityLocator, LookupError};
pub use translation::{TranslationError, Translator};
