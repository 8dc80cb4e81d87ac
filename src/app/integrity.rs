// SPDX-License-Identifier: MPL-2.0
//! Markup contract checks run before wiring.

use crate::dom::query;
use crate::page::Page;
use crate::ui::notifications::toast;
use crate::ui::{nav, sticky};
use crate::ui::toggles::goal;

/// Outcome of the markup checks. Errors abort initialization; warnings are
/// reported and wiring continues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl IntegrityReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs every check and aggregates the findings. A missing toast container
/// is created here.
pub(super) fn check(page: &mut Page) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    if page.page_id().is_none() {
        report
            .errors
            .push("body[data-page] is missing or empty".to_string());
    }

    if nav::root(&page.document).is_none() {
        report.errors.push(format!(
            "primary navigation [data-component=\"{}\"] (or .{}) is missing",
            nav::COMPONENT,
            nav::FALLBACK_CLASS
        ));
    }

    let (_, created) = toast::ensure_container(&mut page.document);
    if created {
        report.warnings.push(format!(
            "toast container [data-component=\"{}\"] was missing and has been created",
            toast::CONTAINER_COMPONENT
        ));
    }

    for (index, card) in goal::cards(&page.document).into_iter().enumerate() {
        if query::stable_id(&page.document, card).is_none() {
            report
                .errors
                .push(format!("goal card #{} has neither data-id nor id", index + 1));
        }
    }

    let setup_page = page.config.page.setup_page();
    if page.page_id().as_deref() == Some(setup_page) && sticky::find(&page.document).is_none() {
        report.warnings.push(format!(
            "sticky bar [data-component=\"{}\"] is missing on the \"{setup_page}\" page",
            sticky::COMPONENT
        ));
    }

    report
}
