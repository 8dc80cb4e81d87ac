// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` creates toasts and walks each one through
//! `Created → Visible → Hiding → removed` as the scheduler fires its
//! timers. Several toasts may be live at once; they stack in the container.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::notification::{Toast, ToastId, ToastOptions, ToastPhase};
use super::toast::{self, VISIBLE_CLASS};
use crate::events::{SprintEvent, ToastDetail};
use crate::page::Page;
use crate::scheduler::Task;

/// Manages live toasts.
#[derive(Debug)]
pub struct Manager {
    /// Toasts still attached to the document, oldest first.
    live: Vec<Toast>,
    rng: StdRng,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a manager with an entropy-seeded id generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a manager with a deterministic id generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            live: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a toast, publishes `toast:show`, and schedules its
    /// visible, hiding and removal transitions.
    pub fn notify(&mut self, page: &mut Page, options: ToastOptions) -> ToastId {
        let (container, _) = toast::ensure_container(&mut page.document);
        let id = self.next_id(page.timestamp_ms());
        let timeout_ms = options
            .timeout
            .unwrap_or_else(|| page.config.toast.timeout_ms());

        let node = toast::render(&mut page.document, &id, &options.message, options.kind);
        page.document.append_child(container, node);

        let record = Toast {
            id: id.clone(),
            node,
            message: options.message,
            kind: options.kind,
            timeout_ms,
            created_at: page.scheduler.now(),
            phase: ToastPhase::Created,
        };
        tracing::debug!(id = %id, kind = record.kind.as_str(), timeout_ms, "toast created");
        page.publish(SprintEvent::ToastShow(detail(&record)));
        self.live.push(record);

        let show_delay = page.config.toast.show_delay_ms();
        page.set_timeout(show_delay, Task::ToastShow(id.clone()));
        page.set_timeout(timeout_ms, Task::ToastHide(id.clone()));
        id
    }

    /// `Created → Visible`. Ignored once the toast started hiding.
    pub fn show(&mut self, page: &mut Page, id: &ToastId) {
        if let Some(toast) = self.find_mut(id) {
            if toast.phase == ToastPhase::Created {
                toast.phase = ToastPhase::Visible;
                page.document.add_class(toast.node, VISIBLE_CLASS);
            }
        }
    }

    /// `Created | Visible → Hiding`, scheduling removal after the fade.
    pub fn hide(&mut self, page: &mut Page, id: &ToastId) {
        let Some(toast) = self.find_mut(id) else {
            return;
        };
        if toast.phase == ToastPhase::Hiding {
            return;
        }
        toast.phase = ToastPhase::Hiding;
        page.document.remove_class(toast.node, VISIBLE_CLASS);
        let fade = page.config.toast.fade_ms();
        page.set_timeout(fade, Task::ToastRemove(id.clone()));
    }

    /// Detaches a hiding toast and publishes `toast:hide`.
    pub fn remove(&mut self, page: &mut Page, id: &ToastId) {
        let Some(pos) = self
            .live
            .iter()
            .position(|t| &t.id == id && t.phase == ToastPhase::Hiding)
        else {
            return;
        };
        let toast = self.live.remove(pos);
        page.document.detach(toast.node);
        tracing::debug!(id = %toast.id, "toast removed");
        page.publish(SprintEvent::ToastHide(detail(&toast)));
    }

    /// Phase of a live toast; `None` once removed.
    #[must_use]
    pub fn phase(&self, id: &ToastId) -> Option<ToastPhase> {
        self.get(id).map(Toast::phase)
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.live.iter().find(|t| &t.id == id)
    }

    /// Live toasts, oldest first.
    pub fn live(&self) -> impl Iterator<Item = &Toast> {
        self.live.iter()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn find_mut(&mut self, id: &ToastId) -> Option<&mut Toast> {
        self.live.iter_mut().find(|t| &t.id == id)
    }

    /// Draws ids until one is not held by a live toast.
    fn next_id(&mut self, timestamp_ms: i64) -> ToastId {
        loop {
            let candidate = ToastId::from_parts(timestamp_ms, self.rng.gen());
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

fn detail(toast: &Toast) -> ToastDetail {
    ToastDetail {
        id: toast.id.to_string(),
        message: toast.message.clone(),
        kind: toast.kind,
    }
}
