// SPDX-License-Identifier: MPL-2.0
//! Event names and typed payloads.

use serde_json::{json, Value};

use crate::ui::notifications::ToastKind;

/// Namespace prefix shared by every published event.
pub const NAMESPACE: &str = "sprint";

/// The fixed set of event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    NavChange,
    GoalToggle,
    PillChange,
    CharacterSelect,
    MenuToggle,
    ToastShow,
    ToastHide,
    StickyChange,
    DrawerOpen,
    DrawerClose,
    ActionStart,
    ActionSave,
    IntegrityFail,
    IntegrityWarn,
    PageReady,
    Teardown,
}

impl EventName {
    pub const ALL: [EventName; 16] = [
        EventName::NavChange,
        EventName::GoalToggle,
        EventName::PillChange,
        EventName::CharacterSelect,
        EventName::MenuToggle,
        EventName::ToastShow,
        EventName::ToastHide,
        EventName::StickyChange,
        EventName::DrawerOpen,
        EventName::DrawerClose,
        EventName::ActionStart,
        EventName::ActionSave,
        EventName::IntegrityFail,
        EventName::IntegrityWarn,
        EventName::PageReady,
        EventName::Teardown,
    ];

    /// Fully qualified name, e.g. `sprint:goal:toggle`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::NavChange => "sprint:nav:change",
            EventName::GoalToggle => "sprint:goal:toggle",
            EventName::PillChange => "sprint:pill:change",
            EventName::CharacterSelect => "sprint:character:select",
            EventName::MenuToggle => "sprint:menu:toggle",
            EventName::ToastShow => "sprint:toast:show",
            EventName::ToastHide => "sprint:toast:hide",
            EventName::StickyChange => "sprint:sticky:change",
            EventName::DrawerOpen => "sprint:drawer:open",
            EventName::DrawerClose => "sprint:drawer:close",
            EventName::ActionStart => "sprint:action:start",
            EventName::ActionSave => "sprint:action:save",
            EventName::IntegrityFail => "sprint:integrity:fail",
            EventName::IntegrityWarn => "sprint:integrity:warn",
            EventName::PageReady => "sprint:page:ready",
            EventName::Teardown => "sprint:teardown",
        }
    }

    /// Parses a fully qualified name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == name)
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which pill family changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillGroup {
    Style,
    BusinessType,
}

impl PillGroup {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PillGroup::Style => "style",
            PillGroup::BusinessType => "business-type",
        }
    }
}

/// Toast payload shared by show and hide events.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDetail {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

/// A published event with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SprintEvent {
    NavChange { href: String },
    GoalToggle { id: String, selected: bool },
    PillChange { pill: String, group: PillGroup, selected: bool },
    CharacterSelect { id: String },
    MenuToggle { expanded: bool },
    ToastShow(ToastDetail),
    ToastHide(ToastDetail),
    StickyChange { is_sticky: bool },
    DrawerOpen { id: String },
    DrawerClose { id: String },
    ActionStart { id: String },
    ActionSave { id: String },
    IntegrityFail { errors: Vec<String> },
    IntegrityWarn { warnings: Vec<String> },
    PageReady { pathname: String },
    Teardown,
}

impl SprintEvent {
    #[must_use]
    pub fn name(&self) -> EventName {
        match self {
            SprintEvent::NavChange { .. } => EventName::NavChange,
            SprintEvent::GoalToggle { .. } => EventName::GoalToggle,
            SprintEvent::PillChange { .. } => EventName::PillChange,
            SprintEvent::CharacterSelect { .. } => EventName::CharacterSelect,
            SprintEvent::MenuToggle { .. } => EventName::MenuToggle,
            SprintEvent::ToastShow(_) => EventName::ToastShow,
            SprintEvent::ToastHide(_) => EventName::ToastHide,
            SprintEvent::StickyChange { .. } => EventName::StickyChange,
            SprintEvent::DrawerOpen { .. } => EventName::DrawerOpen,
            SprintEvent::DrawerClose { .. } => EventName::DrawerClose,
            SprintEvent::ActionStart { .. } => EventName::ActionStart,
            SprintEvent::ActionSave { .. } => EventName::ActionSave,
            SprintEvent::IntegrityFail { .. } => EventName::IntegrityFail,
            SprintEvent::IntegrityWarn { .. } => EventName::IntegrityWarn,
            SprintEvent::PageReady { .. } => EventName::PageReady,
            SprintEvent::Teardown => EventName::Teardown,
        }
    }

    /// The `detail` object a browser `CustomEvent` would carry.
    #[must_use]
    pub fn detail(&self) -> Value {
        match self {
            SprintEvent::NavChange { href } => json!({ "href": href }),
            SprintEvent::GoalToggle { id, selected } => json!({ "id": id, "selected": selected }),
            SprintEvent::PillChange {
                pill,
                group,
                selected,
            } => json!({ "pill": pill, "group": group.as_str(), "selected": selected }),
            SprintEvent::CharacterSelect { id } => json!({ "id": id }),
            SprintEvent::MenuToggle { expanded } => json!({ "expanded": expanded }),
            SprintEvent::ToastShow(detail) | SprintEvent::ToastHide(detail) => json!({
                "id": detail.id,
                "message": detail.message,
                "type": detail.kind.as_str(),
            }),
            SprintEvent::StickyChange { is_sticky } => json!({ "isSticky": is_sticky }),
            SprintEvent::DrawerOpen { id }
            | SprintEvent::DrawerClose { id }
            | SprintEvent::ActionStart { id }
            | SprintEvent::ActionSave { id } => json!({ "id": id }),
            SprintEvent::IntegrityFail { errors } => json!({ "errors": errors }),
            SprintEvent::IntegrityWarn { warnings } => json!({ "warnings": warnings }),
            SprintEvent::PageReady { pathname } => json!({ "pathname": pathname }),
            SprintEvent::Teardown => json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_is_namespaced_and_parses_back() {
        for name in EventName::ALL {
            assert!(name.as_str().starts_with(&format!("{NAMESPACE}:")));
            assert_eq!(EventName::parse(name.as_str()), Some(name));
        }
        assert_eq!(EventName::parse("sprint:unknown"), None);
    }

    #[test]
    fn sticky_detail_uses_camel_case_key() {
        let event = SprintEvent::StickyChange { is_sticky: true };
        assert_eq!(event.detail(), json!({ "isSticky": true }));
    }

    #[test]
    fn toast_detail_reports_type_field() {
        let event = SprintEvent::ToastShow(ToastDetail {
            id: "1-a".into(),
            message: "Saved".into(),
            kind: ToastKind::Success,
        });
        assert_eq!(event.name(), EventName::ToastShow);
        assert_eq!(event.detail()["type"], "success");
    }

    #[test]
    fn teardown_detail_is_empty_object() {
        assert_eq!(SprintEvent::Teardown.detail(), json!({}));
    }
}
