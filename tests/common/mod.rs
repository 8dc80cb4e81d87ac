// SPDX-License-Identifier: MPL-2.0
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sprint_ui::config::Config;
use sprint_ui::dom::{Document, El};
use sprint_ui::events::{EventBus, EventName, SprintEvent};
use sprint_ui::App;

/// A page named `page_id` at `path` with nav, goal cards, pills, a sticky bar
/// and a small form.
pub fn page(page_id: &str, path: &str) -> Document {
    let mut doc = Document::at(path);
    let body = doc.body();
    doc.set_attr(body, "data-page", page_id);
    doc.append_tree(
        body,
        El::new("nav").component("top-nav").children([
            El::new("a").attr("href", "/").attr("data-nav", "home").text("Home"),
            El::new("a").attr("href", "/setup").attr("data-nav", "setup").text("Setup"),
            El::new("a").attr("href", "../goals/").text("Goals"),
        ]),
    );
    doc.append_tree(
        body,
        El::new("main").children([
            El::new("div")
                .component("goal-card")
                .attr("data-id", "launch")
                .child(El::new("button").attr("aria-pressed", "false").text("Launch")),
            El::new("div").component("goal-card").attr("id", "grow").text("Grow"),
            El::new("span").component("business-type-pill").attr("data-value", "retail"),
            El::new("span").component("business-type-pill").attr("data-value", "saas"),
            El::new("input").component("business-type-input"),
            El::new("form").children([El::new("input").attr("name", "title"), El::new("textarea")]),
            El::new("div").class("progress__bar").attr("aria-valuenow", "10"),
            El::new("button")
                .component("action-button")
                .attr("data-action", "save")
                .text("Save"),
        ]),
    );
    doc.append_tree(body, El::new("div").component("sticky-bar"));
    doc.append_tree(body, El::new("div").component("toast-root"));
    doc
}

pub fn app(doc: Document) -> App {
    App::with_seed(doc, Config::default(), 42)
}

#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<SprintEvent>>>);

impl Recorder {
    pub fn attach(bus: &mut EventBus) -> Self {
        let recorder = Self::default();
        let sink = Rc::clone(&recorder.0);
        bus.subscribe_all(move |event| sink.borrow_mut().push(event.clone()));
        recorder
    }

    pub fn of(&self, name: EventName) -> Vec<SprintEvent> {
        self.0
            .borrow()
            .iter()
            .filter(|e| e.name() == name)
            .cloned()
            .collect()
    }

    pub fn names(&self) -> Vec<EventName> {
        self.0.borrow().iter().map(SprintEvent::name).collect()
    }
}
