// SPDX-License-Identifier: MPL-2.0
//! Goal cards: independent toggles identified by `data-id` or `id`.

use super::{is_selected, set_pressed};
use crate::dom::{query, Document, NodeId};
use crate::events::SprintEvent;
use crate::page::Page;

pub const COMPONENT: &str = "goal-card";
pub const FALLBACK_CLASS: &str = "goal-card";

#[must_use]
pub fn cards(doc: &Document) -> Vec<NodeId> {
    query::find_components(doc, COMPONENT, Some(FALLBACK_CLASS))
}

#[must_use]
pub fn find(doc: &Document, id: &str) -> Option<NodeId> {
    query::find_by_stable_id(doc, COMPONENT, Some(FALLBACK_CLASS), id)
}

/// Sets (or, with `None`, inverts) a card's selection and publishes
/// `goal:toggle`. Returns the new state.
pub fn toggle(page: &mut Page, card: NodeId, state: Option<bool>) -> bool {
    let selected = state.unwrap_or_else(|| !is_selected(&page.document, card));
    set_pressed(&mut page.document, card, selected);
    let id = query::stable_id(&page.document, card).unwrap_or_default();
    tracing::debug!(%id, selected, "goal toggled");
    page.publish(SprintEvent::GoalToggle { id, selected });
    selected
}
