// SPDX-License-Identifier: MPL-2.0
//! Component lookup helpers.
//!
//! Components are located by their `data-component` marker first and by a
//! legacy class name second. Every UI module resolves its elements through
//! these functions.

use super::{Document, NodeId};

/// Whether `node` carries `data-component="<component>"`.
#[must_use]
pub fn is_component(doc: &Document, node: NodeId, component: &str) -> bool {
    doc.attr(node, "data-component") == Some(component)
}

/// First element marked as `component`, falling back to the first element
/// with `fallback_class`.
#[must_use]
pub fn find_component(doc: &Document, component: &str, fallback_class: Option<&str>) -> Option<NodeId> {
    doc.select_first(|d, n| is_component(d, n, component))
        .or_else(|| fallback_class.and_then(|class| doc.select_first(|d, n| d.has_class(n, class))))
}

/// Every element marked as `component`; when none exist, every element with
/// `fallback_class`.
#[must_use]
pub fn find_components(doc: &Document, component: &str, fallback_class: Option<&str>) -> Vec<NodeId> {
    let marked = doc.select_all(|d, n| is_component(d, n, component));
    if !marked.is_empty() {
        return marked;
    }
    match fallback_class {
        Some(class) => doc.select_all(|d, n| d.has_class(n, class)),
        None => Vec::new(),
    }
}

/// Stable identifier: non-empty `data-id`, then non-empty `id`.
#[must_use]
pub fn stable_id(doc: &Document, node: NodeId) -> Option<String> {
    ["data-id", "id"]
        .into_iter()
        .filter_map(|name| doc.attr(node, name))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Component element whose stable identifier equals `id`.
#[must_use]
pub fn find_by_stable_id(
    doc: &Document,
    component: &str,
    fallback_class: Option<&str>,
    id: &str,
) -> Option<NodeId> {
    find_components(doc, component, fallback_class)
        .into_iter()
        .find(|node| stable_id(doc, *node).as_deref() == Some(id))
}

/// First descendant `button` of `node`, or `node` itself.
#[must_use]
pub fn inner_control(doc: &Document, node: NodeId) -> NodeId {
    doc.descendants(node)
        .into_iter()
        .find(|child| doc.tag(*child) == "button")
        .unwrap_or(node)
}

/// Whether `node` is an `input`, `textarea` or `select`.
#[must_use]
pub fn is_form_control(doc: &Document, node: NodeId) -> bool {
    matches!(doc.tag(node), "input" | "textarea" | "select")
}

/// Display label: trimmed `data-*` attribute if present, else trimmed text.
#[must_use]
pub fn label(doc: &Document, node: NodeId, attr: &str) -> String {
    doc.attr(node, attr)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| doc.text_content(node).trim().to_string(), str::to_string)
}
