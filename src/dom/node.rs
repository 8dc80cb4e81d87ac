// SPDX-License-Identifier: MPL-2.0
//! Arena-backed document tree.
//!
//! Nodes are never freed: detaching a node only unlinks it from its parent,
//! so a `NodeId` stays valid for the lifetime of its `Document`.

use std::collections::BTreeMap;

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index of the node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    value: String,
    disabled: bool,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

/// Viewport capabilities and scroll position reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset in pixels.
    pub scroll_y: f64,
    /// Whether intersection observation can be attached.
    pub intersection_observer: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            intersection_observer: true,
        }
    }
}

/// In-memory document: an `html` root with a `body`, a location path and a
/// viewport.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    pathname: String,
    viewport: Viewport,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document located at `/`.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            pathname: "/".to_string(),
            viewport: Viewport::default(),
        };
        doc.root = doc.create_element("html");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.body);
        doc
    }

    /// Creates an empty document located at `pathname`.
    #[must_use]
    pub fn at(pathname: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.pathname = pathname.into();
        doc
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    #[must_use]
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Changes the location path without rebuilding the tree (client-side
    /// route change).
    pub fn set_pathname(&mut self, pathname: impl Into<String>) {
        self.pathname = pathname.into();
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    // ---------------------------------------------------------------------
    // Tree structure
    // ---------------------------------------------------------------------

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            element: Element {
                tag: tag.to_ascii_lowercase(),
                ..Element::default()
            },
        });
        id
    }

    /// Appends `child` as the last child of `parent`, moving it if it was
    /// already attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.is_ancestor(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Unlinks `node` from its parent. Detaching the root or a detached node
    /// does nothing.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Whether `node` is reachable from the document root.
    #[must_use]
    pub fn is_connected(&self, node: NodeId) -> bool {
        node == self.root || self.is_ancestor(self.root, node)
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// `node` followed by its ancestors, innermost first.
    #[must_use]
    pub fn composed_path(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = self.nodes[node.0].parent;
        while let Some(id) = current {
            path.push(id);
            current = self.nodes[id.0].parent;
        }
        path
    }

    /// Descendants of `node` in document order, excluding `node`.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    /// Connected elements matching `predicate`, in document order.
    pub fn select_all<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Document, NodeId) -> bool,
    {
        let mut all = vec![self.root];
        all.extend(self.descendants(self.root));
        all.into_iter().filter(|id| predicate(self, *id)).collect()
    }

    /// First connected element matching `predicate`.
    pub fn select_first<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Document, NodeId) -> bool,
    {
        self.select_all(predicate).into_iter().next()
    }

    /// Connected element whose `id` attribute equals `id`.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.select_first(|doc, node| doc.attr(node, "id") == Some(id))
    }

    // ---------------------------------------------------------------------
    // Element data
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].element.tag
    }

    /// Attribute value. Classes are read through [`Document::classes`].
    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].element.attrs.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        if name == "class" {
            return !self.nodes[node.0].element.classes.is_empty();
        }
        self.nodes[node.0].element.attrs.contains_key(name)
    }

    /// Sets an attribute. Setting `class` replaces the class list; setting
    /// `disabled` disables the element.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "class" => {
                self.nodes[node.0].element.classes =
                    value.split_whitespace().map(str::to_string).collect();
            }
            "disabled" => self.nodes[node.0].element.disabled = true,
            "value" => {
                self.nodes[node.0].element.value.clone_from(&value);
                self.nodes[node.0]
                    .element
                    .attrs
                    .insert(name.to_string(), value);
            }
            _ => {
                self.nodes[node.0]
                    .element
                    .attrs
                    .insert(name.to_string(), value);
            }
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        match name {
            "class" => self.nodes[node.0].element.classes.clear(),
            "disabled" => self.nodes[node.0].element.disabled = false,
            _ => {
                self.nodes[node.0].element.attrs.remove(name);
            }
        }
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].element.classes
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].element.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].element.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].element.classes.retain(|c| c != class);
    }

    /// Adds or removes `class`; `force` pins the outcome. Returns whether the
    /// class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or(!self.has_class(node, class));
        if present {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
        present
    }

    /// Concatenated text of `node` and its descendants.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = self.nodes[node.0].element.text.clone();
        for child in self.descendants(node) {
            text.push_str(&self.nodes[child.0].element.text);
        }
        text
    }

    /// Text held by `node` itself, without its descendants.
    #[must_use]
    pub fn own_text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].element.text
    }

    /// Replaces the node's content with `text`, detaching every child.
    pub fn set_text_content(&mut self, node: NodeId, text: impl Into<String>) {
        for child in self.nodes[node.0].children.clone() {
            self.detach(child);
        }
        self.nodes[node.0].element.text = text.into();
    }

    /// Form-control value.
    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        &self.nodes[node.0].element.value
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        self.nodes[node.0].element.value = value.into();
    }

    #[must_use]
    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes[node.0].element.disabled
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        self.nodes[node.0].element.disabled = disabled;
    }

    /// Inline `style` attribute, if any.
    #[must_use]
    pub fn style(&self, node: NodeId) -> Option<&str> {
        self.attr(node, "style")
    }

    /// Total number of nodes ever created, attached or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
