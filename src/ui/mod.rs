// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": views borrow application state and
//! emit messages; they never mutate anything themselves.
//!
//! - [`wall`] - The comment wall page (header, composer, cards, footer)
//! - [`feedback`] - Transient star/sad bursts
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod feedback;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod wall;
