// SPDX-License-Identifier: MPL-2.0
//! Declarative element builder.
//!
//! # Example
//!
//! ```
//! use sprint_ui::dom::{Document, El};
//!
//! let mut doc = Document::new();
//! let nav = doc.append_tree(
//!     doc.body(),
//!     El::new("nav")
//!         .attr("data-component", "top-nav")
//!         .child(El::new("a").attr("href", "/setup").text("Setup")),
//! );
//! assert_eq!(doc.children(nav).len(), 1);
//! ```

use super::{Document, NodeId};

/// An element description that can be materialized into a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct El {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<El>,
}

impl El {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Shorthand for `data-component`.
    #[must_use]
    pub fn component(self, name: &str) -> Self {
        self.attr("data-component", name)
    }

    /// Appends to the `class` attribute.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        if let Some((_, existing)) = self.attrs.iter_mut().find(|(name, _)| name == "class") {
            existing.push(' ');
            existing.push_str(class);
        } else {
            self.attrs.push(("class".to_string(), class.to_string()));
        }
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: El) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = El>) -> Self {
        self.children.extend(children);
        self
    }
}

impl Document {
    /// Materializes `el` as a detached subtree and returns its root.
    pub fn build(&mut self, el: El) -> NodeId {
        let node = self.create_element(&el.tag);
        for (name, value) in el.attrs {
            self.set_attr(node, &name, value);
        }
        if let Some(text) = el.text {
            self.set_text_content(node, text);
        }
        for child in el.children {
            let child = self.build(child);
            self.append_child(node, child);
        }
        node
    }

    /// Materializes `el` and appends it to `parent`.
    pub fn append_tree(&mut self, parent: NodeId, el: El) -> NodeId {
        let node = self.build(el);
        self.append_child(parent, node);
        node
    }
}
