// SPDX-License-Identifier: MPL-2.0
//! Page components.
//!
//! Each component works against a [`Page`](crate::page::Page) and keeps any
//! state it needs in its own small struct; the
//! [`App`](crate::app::App) owns those structs and routes events and timers
//! to them.
//!
//! # Toggles and navigation
//!
//! - [`nav`] - Active-link highlighting for the primary navigation
//! - [`toggles`] - Goal cards, pills, character cards, mobile menu
//! - [`drawer`] - Off-canvas drawers
//!
//! # Transient UI
//!
//! - [`notifications`] - Toasts
//! - [`modal`] - Modal dialogs
//! - [`loading`] - Loading state with exact restore
//! - [`progress`] - Eased progress-bar animation
//! - [`actions`] - Action buttons with a simulated save
//!
//! # Observers
//!
//! - [`sticky`] - Sticky action bar
//! - [`autosave`] - Debounced auto-save

pub mod actions;
pub mod autosave;
pub mod drawer;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod notifications;
pub mod progress;
pub mod sticky;
pub mod toggles;
