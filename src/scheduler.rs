// SPDX-License-Identifier: MPL-2.0
//! Virtual clock and timer queue.
//!
//! Deferred work (timeouts, next-tick callbacks, animation frames) is
//! queued as a [`Task`] with a due time in milliseconds. The owner pops due
//! tasks in (due time, scheduling order) and runs them; a running task may
//! schedule more. Nothing here sleeps: the clock only moves when the owner
//! advances it.

use std::collections::{BTreeMap, HashMap};

use crate::dom::NodeId;
use crate::ui::notifications::ToastId;

/// Handle returned by [`Scheduler::set_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Deferred unit of work.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Re-run navigation highlighting.
    HighlightNav,
    ToastShow(ToastId),
    ToastHide(ToastId),
    ToastRemove(ToastId),
    ModalOpen(NodeId),
    ModalRemove(NodeId),
    AutoSave,
    ProgressFrame { bar: NodeId, generation: u64 },
    ActionComplete(NodeId),
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    queue: BTreeMap<(u64, TimerId), Task>,
    due_by_id: HashMap<TimerId, u64>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Queues `task` to run `delay_ms` from now.
    pub fn set_timeout(&mut self, delay_ms: u64, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay_ms);
        tracing::trace!(?task, due, "timer scheduled");
        self.queue.insert((due, id), task);
        self.due_by_id.insert(id, due);
        id
    }

    /// Queues `task` behind everything already due now.
    pub fn next_tick(&mut self, task: Task) -> TimerId {
        self.set_timeout(0, task)
    }

    /// Cancels a pending timer. Returns `false` if it already ran or was
    /// cancelled.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        match self.due_by_id.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_by_id.contains_key(&id)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Removes and returns the earliest task due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, Task)> {
        let (&(due, id), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }
        let task = self.queue.remove(&(due, id))?;
        self.due_by_id.remove(&id);
        self.now = self.now.max(due);
        Some((id, task))
    }

    /// Moves the clock forward to `until` once every due task has run.
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}
