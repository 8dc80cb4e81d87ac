// SPDX-License-Identifier: MPL-2.0
//! Off-canvas drawers.

use crate::dom::{query, Document, NodeId};
use crate::events::SprintEvent;
use crate::page::Page;

pub const COMPONENT: &str = "drawer";
pub const OPEN_CLASS: &str = "is-open";
/// Class on `body` while any drawer is open.
pub const BODY_OPEN_CLASS: &str = "drawer-open";
/// Attribute marking an opener; its value names the drawer.
pub const OPENER_ATTR: &str = "data-drawer-open";
/// Attribute marking a closer.
pub const CLOSER_ATTR: &str = "data-drawer-close";

#[must_use]
pub fn drawers(doc: &Document) -> Vec<NodeId> {
    query::find_components(doc, COMPONENT, Some(COMPONENT))
}

#[must_use]
pub fn openers(doc: &Document) -> Vec<NodeId> {
    doc.select_all(|d, n| d.has_attr(n, OPENER_ATTR))
}

#[must_use]
pub fn closers(doc: &Document) -> Vec<NodeId> {
    doc.select_all(|d, n| d.has_attr(n, CLOSER_ATTR))
}

#[must_use]
pub fn is_open(doc: &Document, drawer: NodeId) -> bool {
    doc.has_class(drawer, OPEN_CLASS)
}

/// Opens the drawer with stable id `id`, or the first drawer when `id` is
/// `None` or empty. Returns the opened drawer's id.
pub fn open(page: &mut Page, id: Option<&str>) -> Option<String> {
    let all = drawers(&page.document);
    let target = match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => all
            .into_iter()
            .find(|d| query::stable_id(&page.document, *d).as_deref() == Some(id)),
        None => all.into_iter().next(),
    };
    let Some(drawer) = target else {
        tracing::warn!(?id, "no drawer to open");
        return None;
    };

    page.document.add_class(drawer, OPEN_CLASS);
    page.document.set_attr(drawer, "aria-hidden", "false");
    let body = page.document.body();
    page.document.add_class(body, BODY_OPEN_CLASS);

    let id = query::stable_id(&page.document, drawer).unwrap_or_default();
    page.publish(SprintEvent::DrawerOpen { id: id.clone() });
    Some(id)
}

/// Closes every open drawer, publishing one `drawer:close` each. Returns
/// the closed ids in document order.
pub fn close_all(page: &mut Page) -> Vec<String> {
    let open: Vec<_> = drawers(&page.document)
        .into_iter()
        .filter(|d| is_open(&page.document, *d))
        .collect();

    let mut closed = Vec::with_capacity(open.len());
    for drawer in open {
        page.document.remove_class(drawer, OPEN_CLASS);
        page.document.set_attr(drawer, "aria-hidden", "true");
        let id = query::stable_id(&page.document, drawer).unwrap_or_default();
        page.publish(SprintEvent::DrawerClose { id: id.clone() });
        closed.push(id);
    }
    let body = page.document.body();
    page.document.remove_class(body, BODY_OPEN_CLASS);
    closed
}
