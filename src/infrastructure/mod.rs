// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing the application ports.
//!
//! - [`http`]: `reqwest` clients for the comment service, the IP geolocation
//!   lookup and the translation endpoint
//!
//! Nothing outside [`crate::app`] constructs these adapters; the rest of the
//! crate only sees the port traits in [`crate::application::port`].

pub mod http;
