// SPDX-License-Identifier: MPL-2.0
//! Host input: clicks, key presses, input events, scroll and intersection
//! reports.
//!
//! DOM events bubble from the target to the root; every wired behavior on
//! the way runs in attachment order.

use super::listeners::{Behavior, DocumentBehavior, Trigger};
use super::App;
use crate::dom::NodeId;
use crate::ui::toggles::{self, character, goal, menu, pills};
use crate::ui::{drawer, nav};

/// Key pressed in a keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            k if toggles::is_activation_key(k) => {
                if k == "Enter" {
                    Key::Enter
                } else {
                    Key::Space
                }
            }
            _ => Key::Other,
        }
    }

    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// What happened to a dispatched event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Listeners that ran.
    pub handled: usize,
    /// Whether a listener called `preventDefault`.
    pub default_prevented: bool,
}

impl App {
    /// Dispatches a click on `target`. Disabled targets receive nothing.
    pub fn click(&mut self, target: NodeId) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        if self.page.document.is_disabled(target) {
            tracing::trace!(target = target.index(), "click on disabled element ignored");
            return outcome;
        }
        for (node, behavior) in self.listeners_on_path(target, Trigger::Click) {
            if self.handle_click(node, behavior, target) {
                outcome.handled += 1;
            }
        }
        outcome
    }

    /// Dispatches a keydown on `target`, then to document listeners. Like a
    /// click, keyboard activation of a disabled target does nothing.
    pub fn key_down(&mut self, target: NodeId, key: &str) -> DispatchOutcome {
        let key = Key::from_key(key);
        let mut outcome = DispatchOutcome::default();

        if key.activates() && self.page.document.is_disabled(target) {
            tracing::trace!(target = target.index(), "activation of disabled element ignored");
        } else if key.activates() {
            for (node, behavior) in self.listeners_on_path(target, Trigger::KeyDown) {
                self.activate(node, behavior);
                outcome.handled += 1;
                outcome.default_prevented = true;
            }
        }

        if key == Key::Escape {
            let escapes: Vec<NodeId> = self
                .registry
                .document_behaviors()
                .iter()
                .filter_map(|b| match b {
                    DocumentBehavior::ModalEscape(overlay) => Some(*overlay),
                    DocumentBehavior::StickyScroll => None,
                })
                .collect();
            for overlay in escapes {
                if self.close_modal(overlay) {
                    outcome.handled += 1;
                }
            }
        }
        outcome
    }

    /// Sets `value` on a form control and dispatches an input event.
    pub fn input(&mut self, target: NodeId, value: &str) -> DispatchOutcome {
        self.page.document.set_value(target, value);
        let mut outcome = DispatchOutcome::default();
        for (_, behavior) in self.listeners_on_path(target, Trigger::Input) {
            if behavior == Behavior::AutosaveInput {
                self.autosave.on_input(&mut self.page);
                outcome.handled += 1;
            }
        }
        outcome
    }

    /// Scrolls the viewport and notifies scroll listeners.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.page.document.viewport_mut().scroll_y = scroll_y;
        if self
            .registry
            .document_behaviors()
            .contains(&DocumentBehavior::StickyScroll)
        {
            for observer in &self.sticky {
                observer.on_scroll(&mut self.page);
            }
        }
    }

    /// Intersection-observer callback for an observed element.
    pub fn report_intersection(&mut self, target: NodeId, ratio: f64) {
        for observer in self.sticky.iter().filter(|o| o.bar() == target) {
            observer.on_intersection(&mut self.page, ratio);
        }
    }

    /// Wired `(node, behavior)` pairs reacting to `trigger`, innermost node
    /// first.
    fn listeners_on_path(&self, target: NodeId, trigger: Trigger) -> Vec<(NodeId, Behavior)> {
        self.page
            .document
            .composed_path(target)
            .into_iter()
            .flat_map(|node| {
                self.registry
                    .behaviors(node)
                    .iter()
                    .filter(move |b| b.reacts_to(trigger))
                    .map(move |b| (node, *b))
            })
            .collect()
    }

    /// Runs a click listener. Returns `false` when the listener declined the
    /// event.
    fn handle_click(&mut self, node: NodeId, behavior: Behavior, target: NodeId) -> bool {
        tracing::trace!(node = node.index(), ?behavior, "click");
        match behavior {
            Behavior::NavLink => nav::on_link_click(&mut self.page, node),
            Behavior::DrawerOpener => {
                let id = self
                    .page
                    .document
                    .attr(node, drawer::OPENER_ATTR)
                    .map(str::to_string);
                drawer::open(&mut self.page, id.as_deref());
            }
            Behavior::DrawerCloser => {
                drawer::close_all(&mut self.page);
            }
            Behavior::ActionButton => self.actions.start(&mut self.page, node),
            Behavior::ModalClose(overlay) => return self.close_modal(overlay),
            Behavior::ModalBackdrop(overlay) => {
                if target != overlay {
                    return false;
                }
                return self.close_modal(overlay);
            }
            Behavior::GoalCard
            | Behavior::StylePill
            | Behavior::BusinessTypePill
            | Behavior::CharacterCard
            | Behavior::MobileMenuToggle => self.activate(node, behavior),
            Behavior::AutosaveInput | Behavior::StickyBar => return false,
        }
        true
    }

    /// Shared click/keyboard path for toggles.
    fn activate(&mut self, node: NodeId, behavior: Behavior) {
        match behavior {
            Behavior::GoalCard => {
                goal::toggle(&mut self.page, node, None);
            }
            Behavior::StylePill => {
                pills::toggle_style(&mut self.page, node);
            }
            Behavior::BusinessTypePill => pills::select_business_type(&mut self.page, node),
            Behavior::CharacterCard => character::select(&mut self.page, node),
            Behavior::MobileMenuToggle => {
                menu::toggle(&mut self.page, node);
            }
            _ => {}
        }
    }
}
