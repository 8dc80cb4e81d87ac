// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! # Components
//!
//! - [`notification`] - `Toast` record, `ToastKind`, `ToastPhase`, `ToastOptions`
//! - [`manager`] - `Manager` for creation and timed lifecycle
//! - [`toast`] - toast and container markup
//!
//! # Timeline
//!
//! For a toast created at `T` with timeout `t`:
//!
//! - `T`: node attached, `toast:show` published
//! - `T + 10ms`: `is-visible` applied
//! - `T + t`: `is-visible` removed
//! - `T + t + 300ms`: node detached, `toast:hide` published

mod manager;
mod notification;
pub mod toast;

pub use manager::Manager;
pub use notification::{Toast, ToastId, ToastKind, ToastOptions, ToastPhase};
