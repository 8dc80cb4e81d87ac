// SPDX-License-Identifier: MPL-2.0
//! Progress-bar animation.
//!
//! An animation interpolates a bar's width from its current
//! `aria-valuenow` to a target percentage, one scheduler frame at a time,
//! with a cubic ease-out. Starting a new animation on a bar supersedes the
//! one in flight: stale frames carry an old generation and are dropped.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};
use crate::page::Page;
use crate::scheduler::Task;

/// `1 - (1 - t)^3`, for `t` in `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Clamps to `[0, 100]`; NaN becomes 0.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Current `aria-valuenow`, or 0 when absent or unparseable.
#[must_use]
pub fn current_percent(doc: &Document, bar: NodeId) -> f64 {
    doc.attr(bar, "aria-valuenow")
        .and_then(|v| v.trim().parse::<f64>().ok())
        .map_or(0.0, clamp_percent)
}

/// Writes `width: N%` and `aria-valuenow` for the clamped `percent`.
pub fn set_percent(doc: &mut Document, bar: NodeId, percent: f64) {
    let percent = clamp_percent(percent);
    doc.set_attr(bar, "style", format!("width: {percent}%"));
    doc.set_attr(bar, "aria-valuenow", percent.to_string());
}

/// Intermediate frames are written with two decimals.
fn round_frame(percent: f64) -> f64 {
    (percent * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f64,
    to: f64,
    started_at: u64,
    duration_ms: u64,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Animator {
    running: HashMap<NodeId, Animation>,
    next_generation: u64,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Animates `bar` towards `target` percent over `duration_ms` (default
    /// from the progress config). A zero duration jumps straight there.
    pub fn start(&mut self, page: &mut Page, bar: NodeId, target: f64, duration_ms: Option<u64>) {
        let to = clamp_percent(target);
        let duration_ms = duration_ms.unwrap_or_else(|| page.config.progress.duration_ms());
        if duration_ms == 0 {
            self.running.remove(&bar);
            set_percent(&mut page.document, bar, to);
            return;
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        let animation = Animation {
            from: current_percent(&page.document, bar),
            to,
            started_at: page.scheduler.now(),
            duration_ms,
            generation,
        };
        tracing::debug!(bar = bar.index(), from = animation.from, to, duration_ms, "progress animation started");
        self.running.insert(bar, animation);
        let interval = page.config.progress.frame_interval_ms();
        page.set_timeout(interval, Task::ProgressFrame { bar, generation });
    }

    /// Renders one frame; schedules the next until the duration elapses.
    pub fn frame(&mut self, page: &mut Page, bar: NodeId, generation: u64) {
        let Some(animation) = self
            .running
            .get(&bar)
            .copied()
            .filter(|a| a.generation == generation)
        else {
            return;
        };

        let elapsed = page.scheduler.now().saturating_sub(animation.started_at);
        #[allow(clippy::cast_precision_loss)]
        let t = (elapsed as f64 / animation.duration_ms as f64).min(1.0);
        if t >= 1.0 {
            set_percent(&mut page.document, bar, animation.to);
            self.running.remove(&bar);
            return;
        }

        let value = animation.from + (animation.to - animation.from) * ease_out_cubic(t);
        set_percent(&mut page.document, bar, round_frame(value));
        let interval = page.config.progress.frame_interval_ms();
        page.set_timeout(interval, Task::ProgressFrame { bar, generation });
    }

    #[must_use]
    pub fn is_running(&self, bar: NodeId) -> bool {
        self.running.contains_key(&bar)
    }
}
