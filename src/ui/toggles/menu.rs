// SPDX-License-Identifier: MPL-2.0
//! Mobile menu toggle.

use crate::dom::{query, Document, NodeId};
use crate::events::SprintEvent;
use crate::page::Page;

pub const TOGGLE_COMPONENT: &str = "mobile-menu-toggle";
pub const MENU_COMPONENT: &str = "mobile-menu";
pub const OPEN_CLASS: &str = "is-open";

#[must_use]
pub fn toggles(doc: &Document) -> Vec<NodeId> {
    query::find_components(doc, TOGGLE_COMPONENT, Some(TOGGLE_COMPONENT))
}

/// Menu controlled by `toggle`: its `aria-controls` target, else the
/// `mobile-menu` component.
#[must_use]
pub fn controlled_menu(doc: &Document, toggle: NodeId) -> Option<NodeId> {
    doc.attr(toggle, "aria-controls")
        .and_then(|id| doc.element_by_id(id))
        .or_else(|| query::find_component(doc, MENU_COMPONENT, None))
}

#[must_use]
pub fn is_expanded(doc: &Document, toggle: NodeId) -> bool {
    doc.attr(toggle, "aria-expanded") == Some("true")
}

/// Flips `aria-expanded` and the open class, publishing `menu:toggle`.
pub fn toggle(page: &mut Page, toggle: NodeId) -> bool {
    let expanded = !is_expanded(&page.document, toggle);
    page.document
        .set_attr(toggle, "aria-expanded", if expanded { "true" } else { "false" });
    page.document.toggle_class(toggle, OPEN_CLASS, Some(expanded));
    if let Some(menu) = controlled_menu(&page.document, toggle) {
        page.document.toggle_class(menu, OPEN_CLASS, Some(expanded));
    }
    page.publish(SprintEvent::MenuToggle { expanded });
    expanded
}
