// SPDX-License-Identifier: MPL-2.0
//! `sprint_ui` is a headless UI behavior layer for static pages.
//!
//! It wires navigation highlighting, toggles, toasts, modals, drawers,
//! progress bars, a sticky action bar and debounced auto-save over an
//! in-memory document, publishing namespaced events (`sprint:<domain>:<action>`)
//! on a typed bus. Time is virtual: hosts and tests advance it explicitly,
//! or hand the app to the tokio driver in [`runtime`].
//!
//! ```
//! use sprint_ui::app::{App, InitOptions};
//! use sprint_ui::config::Config;
//! use sprint_ui::dom::{Document, El};
//!
//! let mut doc = Document::at("/");
//! let body = doc.body();
//! doc.set_attr(body, "data-page", "home");
//! doc.append_tree(body, El::new("nav").component("top-nav"));
//!
//! let mut app = App::new(doc, Config::default());
//! let report = app.init(InitOptions::default()).expect("valid markup");
//! assert_eq!(report.warnings.len(), 1); // toast container was created
//!
//! app.notify("Welcome back");
//! app.advance(3300);
//! assert_eq!(app.toasts().live_count(), 0);
//! ```

#![doc(html_root_url = "https://docs.rs/sprint_ui/0.3.0")]

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod page;
pub mod runtime;
pub mod scheduler;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{App, InitOptions, Lifecycle};
pub use error::{Error, Result};
