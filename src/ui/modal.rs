// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs.
//!
//! Each `show` builds a fresh overlay appended to the body:
//!
//! ```text
//! div.modal-overlay
//! └── div.modal[role=dialog][aria-modal=true]
//!     ├── header.modal__header
//!     │   ├── h2.modal__title
//!     │   └── button.modal__close
//!     └── div.modal__body
//! ```
//!
//! There is no stacking coordination: a second `show` simply adds a second
//! overlay.

use crate::dom::{Document, El, NodeId};
use crate::page::Page;
use crate::scheduler::Task;

pub const OVERLAY_CLASS: &str = "modal-overlay";
pub const OPEN_CLASS: &str = "is-open";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Attached, waiting for the open class.
    Opening,
    Open,
    /// Open class removed, waiting to be detached.
    Closing,
}

#[derive(Debug, Clone)]
pub struct Modal {
    overlay: NodeId,
    dialog: NodeId,
    close_button: NodeId,
    phase: ModalPhase,
}

impl Modal {
    #[must_use]
    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    #[must_use]
    pub fn dialog(&self) -> NodeId {
        self.dialog
    }

    #[must_use]
    pub fn close_button(&self) -> NodeId {
        self.close_button
    }

    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }
}

/// Builds the detached overlay tree for a dialog.
fn build(doc: &mut Document, title: &str, content: &str) -> (NodeId, NodeId, NodeId) {
    let overlay = doc.build(
        El::new("div").class(OVERLAY_CLASS).child(
            El::new("div")
                .class("modal")
                .attr("role", "dialog")
                .attr("aria-modal", "true")
                .children([
                    El::new("header").class("modal__header").children([
                        El::new("h2").class("modal__title").text(title),
                        El::new("button")
                            .class("modal__close")
                            .attr("type", "button")
                            .attr("aria-label", "Close")
                            .text("×"),
                    ]),
                    El::new("div").class("modal__body").text(content),
                ]),
        ),
    );
    let dialog = doc.children(overlay)[0];
    let header = doc.children(dialog)[0];
    let close_button = doc.children(header)[1];
    (overlay, dialog, close_button)
}

/// Dialogs created by [`Modals::show`] that are still attached.
#[derive(Debug, Default)]
pub struct Modals {
    live: Vec<Modal>,
}

impl Modals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new dialog to the body and schedules its open class.
    pub fn show(&mut self, page: &mut Page, title: &str, content: &str) -> NodeId {
        let (overlay, dialog, close_button) = build(&mut page.document, title, content);
        let body = page.document.body();
        page.document.append_child(body, overlay);
        self.live.push(Modal {
            overlay,
            dialog,
            close_button,
            phase: ModalPhase::Opening,
        });
        let delay = page.config.modal.open_delay_ms();
        page.set_timeout(delay, Task::ModalOpen(overlay));
        tracing::debug!(overlay = overlay.index(), "modal shown");
        overlay
    }

    /// `Opening → Open`.
    pub fn open(&mut self, page: &mut Page, overlay: NodeId) {
        if let Some(modal) = self.find_mut(overlay) {
            if modal.phase == ModalPhase::Opening {
                modal.phase = ModalPhase::Open;
                page.document.add_class(overlay, OPEN_CLASS);
            }
        }
    }

    /// Starts closing. Returns `false` when the dialog is unknown or already
    /// closing.
    pub fn close(&mut self, page: &mut Page, overlay: NodeId) -> bool {
        let Some(modal) = self.find_mut(overlay) else {
            return false;
        };
        if modal.phase == ModalPhase::Closing {
            return false;
        }
        modal.phase = ModalPhase::Closing;
        page.document.remove_class(overlay, OPEN_CLASS);
        let delay = page.config.modal.close_delay_ms();
        page.set_timeout(delay, Task::ModalRemove(overlay));
        true
    }

    /// Detaches a closing dialog.
    pub fn remove(&mut self, page: &mut Page, overlay: NodeId) {
        if let Some(pos) = self
            .live
            .iter()
            .position(|m| m.overlay == overlay && m.phase == ModalPhase::Closing)
        {
            self.live.remove(pos);
            page.document.detach(overlay);
            tracing::debug!(overlay = overlay.index(), "modal removed");
        }
    }

    #[must_use]
    pub fn get(&self, overlay: NodeId) -> Option<&Modal> {
        self.live.iter().find(|m| m.overlay == overlay)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn find_mut(&mut self, overlay: NodeId) -> Option<&mut Modal> {
        self.live.iter_mut().find(|m| m.overlay == overlay)
    }
}
