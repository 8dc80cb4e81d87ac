// SPDX-License-Identifier: MPL-2.0
//! Attaches component listeners after a successful integrity check.

use super::listeners::{Behavior, DocumentBehavior};
use super::App;
use crate::dom::{query, NodeId};
use crate::ui::sticky::{self, StickyMode, StickyObserver};
use crate::ui::toggles::{character, goal, menu, pills};
use crate::ui::{actions, drawer, nav};

impl App {
    pub(super) fn wire_all(&mut self) {
        nav::highlight(&mut self.page);

        let doc = &self.page.document;
        let groups = [
            (nav::links(doc), Behavior::NavLink),
            (menu::toggles(doc), Behavior::MobileMenuToggle),
            (goal::cards(doc), Behavior::GoalCard),
            (pills::style_pills(doc), Behavior::StylePill),
            (pills::business_type_pills(doc), Behavior::BusinessTypePill),
            (character::cards(doc), Behavior::CharacterCard),
            (drawer::openers(doc), Behavior::DrawerOpener),
            (drawer::closers(doc), Behavior::DrawerCloser),
            (actions::buttons(doc), Behavior::ActionButton),
        ];
        for (nodes, behavior) in groups {
            self.wire(&nodes, behavior);
        }

        self.wire_sticky();
        self.wire_autosave();
    }

    /// Attaches `behavior` to every node not already carrying it.
    fn wire(&mut self, nodes: &[NodeId], behavior: Behavior) -> usize {
        let attached = nodes
            .iter()
            .filter(|node| self.registry.attach(**node, behavior))
            .count();
        if attached > 0 {
            tracing::debug!(?behavior, attached, "listeners wired");
        }
        attached
    }

    fn wire_sticky(&mut self) {
        self.prune_sticky_observers();
        let Some(bar) = sticky::find(&self.page.document) else {
            return;
        };
        if !self.registry.attach(bar, Behavior::StickyBar) {
            return;
        }
        let observer = StickyObserver::attach(&mut self.page, bar);
        if observer.mode() == StickyMode::ScrollFallback {
            self.registry.attach_document(DocumentBehavior::StickyScroll);
        }
        self.sticky.push(observer);
    }

    /// Drops observers whose bar left the document, and the scroll listener
    /// once no fallback observer remains.
    fn prune_sticky_observers(&mut self) {
        let doc = &self.page.document;
        let before = self.sticky.len();
        self.sticky.retain(|observer| doc.is_connected(observer.bar()));
        if self.sticky.len() != before {
            tracing::debug!(dropped = before - self.sticky.len(), "detached sticky bars unobserved");
        }
        if !self
            .sticky
            .iter()
            .any(|observer| observer.mode() == StickyMode::ScrollFallback)
        {
            self.registry
                .detach_document(DocumentBehavior::StickyScroll);
        }
    }

    fn wire_autosave(&mut self) {
        let config = &self.page.config;
        if !config.autosave.enabled()
            || self.page.page_id().as_deref() != Some(config.page.autosave_page())
        {
            return;
        }
        let doc = &self.page.document;
        let controls = doc.select_all(query::is_form_control);
        self.wire(&controls, Behavior::AutosaveInput);
    }
}
