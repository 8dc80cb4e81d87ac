// SPDX-License-Identifier: MPL-2.0
//! Debounced auto-save.
//!
//! Every input on a form control restarts one shared timer. When the timer
//! fires the draft is "saved" (logged) and an info toast tells the user.

use crate::page::Page;
use crate::scheduler::{Task, TimerId};
use crate::ui::notifications::{Manager, ToastOptions};

pub const SAVED_MESSAGE: &str = "Draft saved";

#[derive(Debug, Default)]
pub struct AutoSave {
    timer: Option<TimerId>,
    saves: u32,
}

impl AutoSave {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the debounce timer.
    pub fn on_input(&mut self, page: &mut Page) {
        if let Some(timer) = self.timer.take() {
            page.scheduler.clear_timeout(timer);
        }
        let debounce = page.config.autosave.debounce_ms();
        self.timer = Some(page.set_timeout(debounce, Task::AutoSave));
    }

    pub fn fire(&mut self, page: &mut Page, toasts: &mut Manager) {
        self.timer = None;
        self.saves += 1;
        tracing::debug!(saves = self.saves, page = ?page.page_id(), "auto-save");
        toasts.notify(page, ToastOptions::new(SAVED_MESSAGE));
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// Number of times the timer has fired.
    #[must_use]
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dom::Document;

    fn run(page: &mut Page, autosave: &mut AutoSave, toasts: &mut Manager, until: u64) {
        while let Some((_, task)) = page.scheduler.pop_due(until) {
            match task {
                Task::AutoSave => autosave.fire(page, toasts),
                Task::ToastShow(_) | Task::ToastHide(_) | Task::ToastRemove(_) => {}
                other => panic!("unexpected task {other:?}"),
            }
        }
        page.scheduler.settle(until);
    }

    #[test]
    fn each_input_resets_the_timer() {
        let mut page = Page::new(Document::new(), Config::default());
        let mut autosave = AutoSave::new();
        let mut toasts = Manager::with_seed(3);

        autosave.on_input(&mut page);
        run(&mut page, &mut autosave, &mut toasts, 4000);
        autosave.on_input(&mut page);
        run(&mut page, &mut autosave, &mut toasts, 8999);
        assert_eq!(autosave.saves(), 0);
        assert!(autosave.is_pending());

        run(&mut page, &mut autosave, &mut toasts, 9000);
        assert_eq!(autosave.saves(), 1);
        assert!(!autosave.is_pending());
        assert_eq!(toasts.live().next().map(|t| t.message()), Some(SAVED_MESSAGE));
    }
}
