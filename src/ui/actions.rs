// SPDX-License-Identifier: MPL-2.0
//! Action buttons that simulate an asynchronous save.
//!
//! A click publishes `action:start`, puts the button in its loading state
//! for the configured delay, then restores it, publishes `action:save` and
//! raises a success toast.

use std::collections::HashMap;

use crate::dom::{query, Document, NodeId};
use crate::events::SprintEvent;
use crate::page::Page;
use crate::scheduler::Task;
use crate::ui::loading::{self, LoadingHandle};
use crate::ui::notifications::{Manager, ToastKind, ToastOptions};

pub const COMPONENT: &str = "action-button";
pub const SAVING_TEXT: &str = "Saving…";
pub const SAVED_MESSAGE: &str = "Saved";

#[must_use]
pub fn buttons(doc: &Document) -> Vec<NodeId> {
    query::find_components(doc, COMPONENT, Some(COMPONENT))
}

/// Identifier reported in action events: `data-action`, else the stable id,
/// else the label.
#[must_use]
pub fn action_id(doc: &Document, button: NodeId) -> String {
    doc.attr(button, "data-action")
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .or_else(|| query::stable_id(doc, button))
        .unwrap_or_else(|| doc.text_content(button).trim().to_string())
}

#[derive(Debug, Default)]
pub struct ActionRunner {
    in_flight: HashMap<NodeId, (String, LoadingHandle)>,
}

impl ActionRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the action. A button already in flight is left alone.
    pub fn start(&mut self, page: &mut Page, button: NodeId) {
        if self.in_flight.contains_key(&button) {
            return;
        }
        let id = action_id(&page.document, button);
        page.publish(SprintEvent::ActionStart { id: id.clone() });
        let handle = loading::show(&mut page.document, button, Some(SAVING_TEXT));
        self.in_flight.insert(button, (id, handle));
        let delay = page.config.actions.simulated_delay_ms();
        page.set_timeout(delay, Task::ActionComplete(button));
    }

    pub fn complete(&mut self, page: &mut Page, toasts: &mut Manager, button: NodeId) {
        let Some((id, handle)) = self.in_flight.remove(&button) else {
            return;
        };
        handle.restore(&mut page.document);
        tracing::debug!(%id, "action saved");
        page.publish(SprintEvent::ActionSave { id });
        toasts.notify(page, ToastOptions::new(SAVED_MESSAGE).kind(ToastKind::Success));
    }

    #[must_use]
    pub fn is_running(&self, button: NodeId) -> bool {
        self.in_flight.contains_key(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dom::El;
    use crate::events::EventName;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn action_id_prefers_data_action() {
        let mut doc = Document::new();
        let a = doc.append_tree(doc.body(), El::new("button").attr("data-action", "publish").attr("id", "x"));
        let b = doc.append_tree(doc.body(), El::new("button").attr("id", "draft"));
        let c = doc.append_tree(doc.body(), El::new("button").text(" Save "));
        assert_eq!(action_id(&doc, a), "publish");
        assert_eq!(action_id(&doc, b), "draft");
        assert_eq!(action_id(&doc, c), "Save");
    }

    #[test]
    fn full_action_lifecycle() {
        let mut doc = Document::new();
        let button = doc.append_tree(
            doc.body(),
            El::new("button").component(COMPONENT).attr("data-action", "save-plan").text("Save plan"),
        );
        let mut page = Page::new(doc, Config::default());
        let names = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&names);
        page.bus_mut().subscribe_all(move |e| sink.borrow_mut().push(e.name()));

        let mut runner = ActionRunner::new();
        let mut toasts = Manager::with_seed(5);
        runner.start(&mut page, button);
        runner.start(&mut page, button);
        assert!(page.document().is_disabled(button));
        assert_eq!(page.document().text_content(button), SAVING_TEXT);

        while let Some((_, task)) = page.scheduler.pop_due(1200) {
            if let Task::ActionComplete(node) = task {
                runner.complete(&mut page, &mut toasts, node);
            }
        }

        assert!(!runner.is_running(button));
        assert!(!page.document().is_disabled(button));
        assert_eq!(page.document().text_content(button), "Save plan");
        assert_eq!(
            *names.borrow(),
            vec![EventName::ActionStart, EventName::ActionSave, EventName::ToastShow]
        );
        let toast = toasts.live().next().expect("success toast");
        assert_eq!(toast.kind(), ToastKind::Success);
    }
}
