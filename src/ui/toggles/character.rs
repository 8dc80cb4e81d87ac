// SPDX-License-Identifier: MPL-2.0
//! Character cards: single-select, mirrored into a preview pane.

use super::select_exclusive;
use crate::dom::{query, Document, NodeId};
use crate::events::SprintEvent;
use crate::page::Page;

pub const COMPONENT: &str = "character-card";
pub const PREVIEW_COMPONENT: &str = "character-preview";

#[must_use]
pub fn cards(doc: &Document) -> Vec<NodeId> {
    query::find_components(doc, COMPONENT, Some(COMPONENT))
}

/// Selects `card`, writes its `data-name` (or text) into the preview, and
/// publishes `character:select`.
pub fn select(page: &mut Page, card: NodeId) {
    let group = cards(&page.document);
    select_exclusive(&mut page.document, &group, card);

    let name = query::label(&page.document, card, "data-name");
    if let Some(preview) = query::find_component(&page.document, PREVIEW_COMPONENT, None) {
        page.document.set_text_content(preview, name.clone());
    }
    let id = query::stable_id(&page.document, card).unwrap_or(name);
    page.publish(SprintEvent::CharacterSelect { id });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dom::El;
    use crate::ui::toggles::is_selected;

    #[test]
    fn select_updates_preview_and_group() {
        let mut doc = Document::new();
        doc.append_tree(
            doc.body(),
            El::new("section").children([
                El::new("div").component(COMPONENT).attr("data-id", "ada").attr("data-name", "Ada"),
                El::new("div").component(COMPONENT).text("Grace"),
                El::new("aside").component(PREVIEW_COMPONENT),
            ]),
        );
        let mut page = Page::new(doc, Config::default());
        let group = cards(page.document());
        let preview = query::find_component(page.document(), PREVIEW_COMPONENT, None).expect("preview");

        select(&mut page, group[0]);
        assert_eq!(page.document().text_content(preview), "Ada");

        select(&mut page, group[1]);
        assert_eq!(page.document().text_content(preview), "Grace");
        assert!(!is_selected(page.document(), group[0]));
        assert!(is_selected(page.document(), group[1]));
    }
}
