// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`board`]: Page state and the pure transitions driven by user actions
//! - [`flow`]: Execution of remote requests against the ports
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the [`board::Board`] and runs [`flow::run`]
//!   inside Iced tasks
//!
//! # Example
//!
//! ```ignore
//! use comment_wall::application::board::Board;
//! use comment_wall::application::flow;
//!
//! let mut board = Board::new(services.has_comment_api());
//! board.edit_draft("Hello from here".into());
//! if let Some(request) = board.submit() {
//!     let outcome = flow::run(services.clone(), request).await;
//!     let effects = board.apply(outcome);
//! }
//! ```

pub mod board;
pub mod flow;
pub mod port;
