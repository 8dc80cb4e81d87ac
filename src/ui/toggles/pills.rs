// SPDX-License-Identifier: MPL-2.0
//! Style pills (independent) and business-type pills (single-select, with
//! the chosen value mirrored into a linked form field).

use super::{is_selected, select_exclusive, set_pressed};
use crate::dom::{query, Document, NodeId};
use crate::events::{PillGroup, SprintEvent};
use crate::page::Page;

pub const STYLE_COMPONENT: &str = "style-pill";
pub const BUSINESS_TYPE_COMPONENT: &str = "business-type-pill";
pub const BUSINESS_TYPE_INPUT: &str = "business-type-input";

#[must_use]
pub fn style_pills(doc: &Document) -> Vec<NodeId> {
    query::find_components(doc, STYLE_COMPONENT, Some(STYLE_COMPONENT))
}

#[must_use]
pub fn business_type_pills(doc: &Document) -> Vec<NodeId> {
    query::find_components(doc, BUSINESS_TYPE_COMPONENT, Some(BUSINESS_TYPE_COMPONENT))
}

/// Value reported for a pill: `data-value`, else its text.
#[must_use]
pub fn value(doc: &Document, pill: NodeId) -> String {
    query::label(doc, pill, "data-value")
}

/// Flips a style pill and publishes `pill:change`.
pub fn toggle_style(page: &mut Page, pill: NodeId) -> bool {
    let selected = !is_selected(&page.document, pill);
    set_pressed(&mut page.document, pill, selected);
    let pill_value = value(&page.document, pill);
    page.publish(SprintEvent::PillChange {
        pill: pill_value,
        group: PillGroup::Style,
        selected,
    });
    selected
}

/// Makes `pill` the only selected business type, writes its value into the
/// linked field, and publishes `pill:change`.
pub fn select_business_type(page: &mut Page, pill: NodeId) {
    let group = business_type_pills(&page.document);
    select_exclusive(&mut page.document, &group, pill);

    let pill_value = value(&page.document, pill);
    if let Some(field) = linked_field(&page.document, pill) {
        page.document.set_value(field, pill_value.clone());
    }
    page.publish(SprintEvent::PillChange {
        pill: pill_value,
        group: PillGroup::BusinessType,
        selected: true,
    });
}

/// Field named by the pill's `data-target` id, else the
/// `business-type-input` component.
fn linked_field(doc: &Document, pill: NodeId) -> Option<NodeId> {
    doc.attr(pill, "data-target")
        .and_then(|target| doc.element_by_id(target.trim_start_matches('#')))
        .or_else(|| query::find_component(doc, BUSINESS_TYPE_INPUT, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dom::El;

    fn pill_page() -> Page {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_tree(
            body,
            El::new("form").children([
                El::new("div").component(STYLE_COMPONENT).attr("data-value", "bold").text("Bold"),
                El::new("div").component(STYLE_COMPONENT).text(" Calm "),
                El::new("div").component(BUSINESS_TYPE_COMPONENT).attr("data-value", "retail"),
                El::new("div")
                    .component(BUSINESS_TYPE_COMPONENT)
                    .attr("data-value", "saas")
                    .attr("data-target", "#biz"),
                El::new("input").attr("id", "biz"),
                El::new("input").component(BUSINESS_TYPE_INPUT),
            ]),
        );
        Page::new(doc, Config::default())
    }

    #[test]
    fn style_pills_toggle_independently() {
        let mut page = pill_page();
        let pills = style_pills(page.document());
        assert!(toggle_style(&mut page, pills[0]));
        assert!(toggle_style(&mut page, pills[1]));
        assert!(is_selected(page.document(), pills[0]));
        assert!(!toggle_style(&mut page, pills[0]));
        assert!(is_selected(page.document(), pills[1]));
    }

    #[test]
    fn style_pill_value_falls_back_to_text() {
        let page = pill_page();
        let pills = style_pills(page.document());
        assert_eq!(value(page.document(), pills[1]), "Calm");
    }

    #[test]
    fn business_type_is_single_select_and_mirrors_value() {
        let mut page = pill_page();
        let pills = business_type_pills(page.document());
        let default_field = query::find_component(page.document(), BUSINESS_TYPE_INPUT, None)
            .expect("fallback field");
        let targeted_field = page.document().element_by_id("biz").expect("targeted field");

        select_business_type(&mut page, pills[0]);
        assert_eq!(page.document().value(default_field), "retail");

        select_business_type(&mut page, pills[1]);
        assert!(!is_selected(page.document(), pills[0]));
        assert!(is_selected(page.document(), pills[1]));
        assert_eq!(page.document().value(targeted_field), "saas");
        assert_eq!(page.document().value(default_field), "retail");
    }
}
