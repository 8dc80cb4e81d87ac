// SPDX-License-Identifier: MPL-2.0
//! Namespaced UI events.
//!
//! Every interactive component reports state changes as a [`SprintEvent`]
//! published on the page's [`EventBus`]. Names follow the
//! `sprint:<domain>:<action>` scheme of browser custom events, and
//! [`SprintEvent::detail`] renders the payload a `CustomEvent` would carry.

mod bus;
mod event;

pub use bus::{EventBus, SubscriptionId};
pub use event::{EventName, PillGroup, SprintEvent, ToastDetail, NAMESPACE};
