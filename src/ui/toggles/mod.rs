// SPDX-License-Identifier: MPL-2.0
//! Click/keyboard toggles.
//!
//! Two flavors share the same mechanics:
//!
//! - **independent** ([`goal`], style pills in [`pills`], [`menu`]): the
//!   element flips its own state
//! - **single-select** (business-type pills in [`pills`], [`character`]):
//!   the element becomes the only selected one of its component
//!
//! Enter and Space activate a focused toggle like a click.

pub mod character;
pub mod goal;
pub mod menu;
pub mod pills;

use crate::dom::{query, Document, NodeId};

/// Class carried by selected cards and pills.
pub const SELECTED_CLASS: &str = "is-selected";

/// Keys that activate a focused toggle.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[must_use]
pub fn is_selected(doc: &Document, node: NodeId) -> bool {
    doc.has_class(node, SELECTED_CLASS)
}

/// Applies the selected class to `node` and mirrors it onto `aria-pressed`
/// of its inner control.
pub fn set_pressed(doc: &mut Document, node: NodeId, selected: bool) {
    doc.toggle_class(node, SELECTED_CLASS, Some(selected));
    let control = query::inner_control(doc, node);
    doc.set_attr(control, "aria-pressed", if selected { "true" } else { "false" });
}

/// Selects `chosen` and deselects every other node in `group`.
pub fn select_exclusive(doc: &mut Document, group: &[NodeId], chosen: NodeId) {
    for node in group {
        set_pressed(doc, *node, *node == chosen);
    }
}
