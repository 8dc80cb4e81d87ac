// SPDX-License-Identifier: MPL-2.0
//! Loading state for buttons and other controls.

use crate::dom::{Document, NodeId};

pub const LOADING_CLASS: &str = "is-loading";
pub const DEFAULT_LOADING_TEXT: &str = "Loading…";

/// Everything `show` replaced, so `restore` can put it back.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "the control stays in its loading state until the handle is restored"]
pub struct LoadingHandle {
    node: NodeId,
    text: String,
    children: Vec<NodeId>,
    was_disabled: bool,
    had_class: bool,
    busy: Option<String>,
}

impl LoadingHandle {
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Restores the label, children, disabled flag, class and `aria-busy`
    /// exactly as they were.
    pub fn restore(self, doc: &mut Document) {
        doc.set_text_content(self.node, self.text);
        for child in self.children {
            doc.append_child(self.node, child);
        }
        doc.set_disabled(self.node, self.was_disabled);
        doc.toggle_class(self.node, LOADING_CLASS, Some(self.had_class));
        match self.busy {
            Some(value) => doc.set_attr(self.node, "aria-busy", value),
            None => doc.remove_attr(self.node, "aria-busy"),
        }
    }
}

/// Puts `node` in its loading state: label replaced by `text` (default
/// [`DEFAULT_LOADING_TEXT`]), disabled, busy.
pub fn show(doc: &mut Document, node: NodeId, text: Option<&str>) -> LoadingHandle {
    let handle = LoadingHandle {
        node,
        text: doc.own_text(node).to_string(),
        children: doc.children(node).to_vec(),
        was_disabled: doc.is_disabled(node),
        had_class: doc.has_class(node, LOADING_CLASS),
        busy: doc.attr(node, "aria-busy").map(str::to_string),
    };
    doc.set_text_content(node, text.unwrap_or(DEFAULT_LOADING_TEXT));
    doc.set_disabled(node, true);
    doc.add_class(node, LOADING_CLASS);
    doc.set_attr(node, "aria-busy", "true");
    handle
}
