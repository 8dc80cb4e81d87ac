// SPDX-License-Identifier: MPL-2.0
//! Test helpers: a representative page, an event recorder and log capture.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Document, El};
use crate::events::{EventBus, EventName, SprintEvent};

/// The setup page at `/setup` with every recognized component present.
pub fn sample_document() -> Document {
    let mut doc = Document::at("/setup");
    let body = doc.body();
    doc.set_attr(body, "data-page", "setup");
    doc.append_tree(
        body,
        El::new("header").children([
            El::new("nav").component("top-nav").children([
                El::new("a").attr("href", "/").attr("data-nav", "home").text("Home"),
                El::new("a").attr("href", "/setup").attr("data-nav", "setup").text("Setup"),
                El::new("a").attr("href", "/about").text("About"),
            ]),
            El::new("button")
                .component("mobile-menu-toggle")
                .attr("aria-expanded", "false")
                .text("Menu"),
            El::new("ul").component("mobile-menu"),
        ]),
    );
    doc.append_tree(
        body,
        El::new("main").children([
            El::new("div")
                .component("goal-card")
                .attr("data-id", "goal-launch")
                .child(El::new("button").text("Launch")),
            El::new("div").component("goal-card").attr("id", "goal-grow").text("Grow"),
            El::new("span").component("style-pill").attr("data-value", "bold").text("Bold"),
            El::new("span").component("style-pill").text("Calm"),
            El::new("span").component("business-type-pill").attr("data-value", "retail").text("Retail"),
            El::new("span").component("business-type-pill").attr("data-value", "saas").text("SaaS"),
            El::new("input").component("business-type-input").attr("name", "business_type"),
            El::new("div").component("character-card").attr("data-id", "ada").attr("data-name", "Ada"),
            El::new("div").component("character-card").attr("data-id", "grace").attr("data-name", "Grace"),
            El::new("aside").component("character-preview"),
            El::new("form").children([
                El::new("input").attr("name", "title"),
                El::new("textarea").attr("name", "notes"),
                El::new("select").attr("name", "pace"),
            ]),
            El::new("div")
                .class("progress__bar")
                .attr("role", "progressbar")
                .attr("aria-valuenow", "0"),
            El::new("button").attr("data-drawer-open", "filters").text("Filters"),
            El::new("button")
                .component("action-button")
                .attr("data-action", "save-plan")
                .text("Save plan"),
        ]),
    );
    doc.append_tree(
        body,
        El::new("aside")
            .component("drawer")
            .attr("id", "filters")
            .attr("aria-hidden", "true")
            .child(El::new("button").attr("data-drawer-close", "").text("Close")),
    );
    doc.append_tree(body, El::new("div").component("sticky-bar").text("Next"));
    doc.append_tree(body, El::new("div").component("toast-root"));
    doc
}

/// Records every event published on a bus.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<SprintEvent>>>,
}

impl EventRecorder {
    pub fn attach(bus: &mut EventBus) -> Self {
        let recorder = Self::default();
        let sink = Rc::clone(&recorder.events);
        bus.subscribe_all(move |event| sink.borrow_mut().push(event.clone()));
        recorder
    }

    pub fn events(&self) -> Vec<SprintEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<EventName> {
        self.events.borrow().iter().map(SprintEvent::name).collect()
    }

    pub fn count(&self, name: EventName) -> usize {
        self.events.borrow().iter().filter(|e| e.name() == name).count()
    }
}

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
