// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`comment`]: Comments, submissions, reactions and the detected city
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`feedback`]: Symbols and lifetime of the transient feedback burst

pub mod comment;
pub mod diagnostics;
pub mod feedback;
