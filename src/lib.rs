// SPDX-License-Identifier: MPL-2.0
//! `comment_wall` is a small comment wall client built with the Iced GUI framework.
//!
//! Visitors post short comments tagged with the city detected from their IP,
//! like or dislike comments, and translate any comment to English on demand.
//!
//! # Layers
//!
//! - [`domain`]: comments, reactions, the detected city, feedback symbols
//! - [`application`]: the page state container, remote flows and port traits
//! - [`infrastructure`]: HTTP adapters for the ports
//! - [`diagnostics`]: developer-facing event log with JSON export
//! - [`ui`] and [`app`]: the Iced front end

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod strings;
pub mod ui;

#[cfg(test)]
mod test_utils;
