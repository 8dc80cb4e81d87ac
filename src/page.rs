// SPDX-License-Identifier: MPL-2.0
//! The environment every UI component works against: the document, the
//! event bus, the virtual clock and the behavior configuration.

use chrono::Utc;

use crate::config::Config;
use crate::dom::Document;
use crate::events::{EventBus, SprintEvent};
use crate::scheduler::{Scheduler, Task, TimerId};

#[derive(Debug)]
pub struct Page {
    pub(crate) document: Document,
    pub(crate) bus: EventBus,
    pub(crate) scheduler: Scheduler,
    pub(crate) config: Config,
    epoch_ms: i64,
}

impl Page {
    /// Wraps `document`, starting the virtual clock at the current wall time.
    #[must_use]
    pub fn new(document: Document, config: Config) -> Self {
        Self {
            document,
            bus: EventBus::new(),
            scheduler: Scheduler::new(),
            config,
            epoch_ms: Utc::now().timestamp_millis(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub(crate) fn publish(&mut self, event: SprintEvent) {
        self.bus.publish(event);
    }

    pub(crate) fn set_timeout(&mut self, delay_ms: u64, task: Task) -> TimerId {
        self.scheduler.set_timeout(delay_ms, task)
    }

    /// Wall-clock milliseconds: creation time plus virtual elapsed time.
    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        let elapsed = i64::try_from(self.scheduler.now()).unwrap_or(i64::MAX);
        self.epoch_ms.saturating_add(elapsed)
    }

    /// Trimmed `body[data-page]`, if present and non-empty.
    #[must_use]
    pub fn page_id(&self) -> Option<String> {
        self.document
            .attr(self.document.body(), "data-page")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    #[must_use]
    pub fn pathname(&self) -> &str {
        self.document.pathname()
    }
}
