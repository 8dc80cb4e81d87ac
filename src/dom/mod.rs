// SPDX-License-Identifier: MPL-2.0
//! Headless document model.
//!
//! The behavior layer never touches a real browser. It works on this
//! in-memory tree, which a host can mirror into its own DOM or drive
//! directly from tests.
//!
//! # Components
//!
//! - [`Document`] - arena tree with attributes, classes, text and viewport
//! - [`El`] - builder for markup fragments
//! - [`query`] - `data-component` lookup with class-name fallback

mod builder;
mod node;
pub mod query;

pub use builder::El;
pub use node::{Document, NodeId, Viewport};
