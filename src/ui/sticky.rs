// SPDX-License-Identifier: MPL-2.0
//! Sticky action bar observer.
//!
//! With intersection observation available the host reports the bar's
//! visible ratio; anything below full visibility means the bar is stuck.
//! Without it the observer falls back to comparing the scroll offset with a
//! pixel threshold, once on attach and again on every scroll.

use crate::config::STICKY_VISIBILITY_THRESHOLD;
use crate::dom::{query, Document, NodeId};
use crate::events::SprintEvent;
use crate::page::Page;

pub const COMPONENT: &str = "sticky-bar";
pub const STUCK_CLASS: &str = "is-stuck";

#[must_use]
pub fn find(doc: &Document) -> Option<NodeId> {
    query::find_component(doc, COMPONENT, Some(COMPONENT))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyMode {
    Intersection,
    ScrollFallback,
}

#[derive(Debug, Clone)]
pub struct StickyObserver {
    bar: NodeId,
    mode: StickyMode,
}

impl StickyObserver {
    /// Starts observing `bar`. In scroll-fallback mode the current scroll
    /// offset is evaluated right away.
    pub fn attach(page: &mut Page, bar: NodeId) -> Self {
        let mode = if page.document.viewport().intersection_observer {
            StickyMode::Intersection
        } else {
            tracing::debug!("intersection observation unavailable, using scroll fallback");
            StickyMode::ScrollFallback
        };
        let observer = Self { bar, mode };
        if mode == StickyMode::ScrollFallback {
            observer.on_scroll(page);
        }
        observer
    }

    #[must_use]
    pub fn bar(&self) -> NodeId {
        self.bar
    }

    #[must_use]
    pub fn mode(&self) -> StickyMode {
        self.mode
    }

    /// Intersection callback. Ignored in scroll-fallback mode.
    pub fn on_intersection(&self, page: &mut Page, ratio: f64) {
        if self.mode == StickyMode::Intersection {
            self.apply(page, ratio < STICKY_VISIBILITY_THRESHOLD);
        }
    }

    /// Scroll callback. Ignored in intersection mode.
    pub fn on_scroll(&self, page: &mut Page) {
        if self.mode == StickyMode::ScrollFallback {
            let threshold = page.config.sticky.scroll_threshold_px();
            let stuck = page.document.viewport().scroll_y > threshold;
            self.apply(page, stuck);
        }
    }

    fn apply(&self, page: &mut Page, stuck: bool) {
        if page.document.has_class(self.bar, STUCK_CLASS) == stuck {
            return;
        }
        page.document.toggle_class(self.bar, STUCK_CLASS, Some(stuck));
        page.publish(SprintEvent::StickyChange { is_sticky: stuck });
    }
}
