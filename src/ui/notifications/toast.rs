// SPDX-License-Identifier: MPL-2.0
//! Toast markup: the shared container and individual toast nodes.

use super::notification::{ToastId, ToastKind};
use crate::dom::{query, Document, El, NodeId};

/// `data-component` marker of the toast container.
pub const CONTAINER_COMPONENT: &str = "toast-root";

/// Legacy class of the toast container.
pub const CONTAINER_CLASS: &str = "toast-container";

/// Class applied while a toast is visible.
pub const VISIBLE_CLASS: &str = "is-visible";

const CONTAINER_STYLE: &str = "position: fixed; top: 1rem; right: 1rem; display: flex; \
     flex-direction: column; gap: 0.5rem; z-index: 1000";

/// Returns the toast container, creating it in `body` when missing. The flag
/// is `true` when it had to be created.
pub fn ensure_container(doc: &mut Document) -> (NodeId, bool) {
    if let Some(existing) = query::find_component(doc, CONTAINER_COMPONENT, Some(CONTAINER_CLASS)) {
        return (existing, false);
    }
    let body = doc.body();
    let container = doc.append_tree(
        body,
        El::new("div")
            .component(CONTAINER_COMPONENT)
            .class(CONTAINER_CLASS)
            .attr("aria-live", "polite")
            .attr("style", CONTAINER_STYLE),
    );
    tracing::debug!("created toast container");
    (container, true)
}

/// Builds a detached toast node.
pub fn render(doc: &mut Document, id: &ToastId, message: &str, kind: ToastKind) -> NodeId {
    doc.build(
        El::new("div")
            .class("toast")
            .class(&format!("toast--{}", kind.as_str()))
            .attr("role", kind.role())
            .attr("aria-live", kind.aria_live())
            .attr("data-toast-id", id.as_str())
            .text(message),
    )
}
