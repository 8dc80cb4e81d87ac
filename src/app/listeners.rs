// SPDX-License-Identifier: MPL-2.0
//! Registry of wired listeners.
//!
//! Each `(node, behavior)` pair is attached at most once, which makes
//! repeated initialization idempotent. Page listeners are never removed; a
//! node that is replaced in the document has a fresh `NodeId` and is wired
//! again on the next init. Modal listeners are detached together with their
//! modal. Document-level listeners (modal Escape, sticky scroll fallback)
//! live in a separate ordered list.

use std::collections::HashMap;

use crate::dom::NodeId;

/// What a node listener does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    NavLink,
    GoalCard,
    StylePill,
    BusinessTypePill,
    CharacterCard,
    MobileMenuToggle,
    DrawerOpener,
    DrawerCloser,
    ActionButton,
    AutosaveInput,
    /// Marks an observed sticky bar; reacts to no DOM event.
    StickyBar,
    /// Close button of the modal whose overlay is given.
    ModalClose(NodeId),
    /// Backdrop click on the given overlay.
    ModalBackdrop(NodeId),
}

/// DOM event kinds a listener can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Click,
    KeyDown,
    Input,
}

impl Behavior {
    #[must_use]
    pub fn reacts_to(self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Click => !matches!(self, Behavior::AutosaveInput | Behavior::StickyBar),
            Trigger::KeyDown => self.is_toggle(),
            Trigger::Input => self == Behavior::AutosaveInput,
        }
    }

    /// Toggles also activate from the keyboard.
    #[must_use]
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            Behavior::GoalCard
                | Behavior::StylePill
                | Behavior::BusinessTypePill
                | Behavior::CharacterCard
                | Behavior::MobileMenuToggle
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentBehavior {
    /// Escape closes the modal with this overlay.
    ModalEscape(NodeId),
    /// Scroll re-evaluates the sticky fallback.
    StickyScroll,
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    by_node: HashMap<NodeId, Vec<Behavior>>,
    document: Vec<DocumentBehavior>,
    attached: usize,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires `behavior` on `node`. Returns `false` if it already was.
    pub fn attach(&mut self, node: NodeId, behavior: Behavior) -> bool {
        let behaviors = self.by_node.entry(node).or_default();
        if behaviors.contains(&behavior) {
            return false;
        }
        behaviors.push(behavior);
        self.attached += 1;
        true
    }

    /// Unwires `behavior` from `node`. Returns `false` if it was not wired.
    pub fn detach(&mut self, node: NodeId, behavior: Behavior) -> bool {
        let Some(behaviors) = self.by_node.get_mut(&node) else {
            return false;
        };
        let before = behaviors.len();
        behaviors.retain(|b| *b != behavior);
        if behaviors.len() == before {
            return false;
        }
        if behaviors.is_empty() {
            self.by_node.remove(&node);
        }
        self.attached -= 1;
        true
    }

    #[must_use]
    pub fn is_wired(&self, node: NodeId, behavior: Behavior) -> bool {
        self.by_node
            .get(&node)
            .is_some_and(|behaviors| behaviors.contains(&behavior))
    }

    /// Behaviors on `node` in attachment order.
    #[must_use]
    pub fn behaviors(&self, node: NodeId) -> &[Behavior] {
        self.by_node.get(&node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total node listeners attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attached
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached == 0
    }

    pub fn attach_document(&mut self, behavior: DocumentBehavior) -> bool {
        if self.document.contains(&behavior) {
            return false;
        }
        self.document.push(behavior);
        true
    }

    pub fn detach_document(&mut self, behavior: DocumentBehavior) -> bool {
        let before = self.document.len();
        self.document.retain(|b| *b != behavior);
        self.document.len() != before
    }

    #[must_use]
    pub fn document_behaviors(&self) -> &[DocumentBehavior] {
        &self.document
    }
}
