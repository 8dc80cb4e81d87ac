// SPDX-License-Identifier: MPL-2.0
//! Primary navigation highlighting.
//!
//! A link is active when its `data-nav` matches `body[data-page]`, or, when
//! either identifier is missing, when its `href` resolves to the current
//! path. Only the first matching link is marked.

use crate::dom::{query, Document, NodeId};
use crate::events::SprintEvent;
use crate::page::Page;
use crate::scheduler::Task;

pub const COMPONENT: &str = "top-nav";
pub const FALLBACK_CLASS: &str = "nav-center";
pub const ACTIVE_CLASS: &str = "is-active";

/// The primary navigation container.
#[must_use]
pub fn root(doc: &Document) -> Option<NodeId> {
    query::find_component(doc, COMPONENT, Some(FALLBACK_CLASS))
}

/// Anchors inside the primary navigation, in document order.
#[must_use]
pub fn links(doc: &Document) -> Vec<NodeId> {
    root(doc)
        .map(|nav| {
            doc.descendants(nav)
                .into_iter()
                .filter(|n| doc.tag(*n) == "a")
                .collect()
        })
        .unwrap_or_default()
}

/// Trims trailing slashes; the empty path is `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Resolves `href` against `current` the way a browser resolves a link
/// against `location`, returning only the path. `None` for targets without
/// a path (`mailto:`, `javascript:`, empty).
#[must_use]
pub fn resolve_href(href: &str, current: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let without_fragment = href.split('#').next().unwrap_or_default();
    let target = without_fragment.split('?').next().unwrap_or_default();

    let raw_path = if let Some(rest) = target.strip_prefix("//") {
        path_after_authority(rest)
    } else if let Some((scheme, rest)) = target.split_once("://") {
        if !matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https") {
            return None;
        }
        path_after_authority(rest)
    } else if has_scheme(target) {
        return None;
    } else if target.starts_with('/') {
        target.to_string()
    } else if target.is_empty() {
        // Fragment- or query-only links point at the current page.
        current.to_string()
    } else {
        let base = match current.rfind('/') {
            Some(idx) => &current[..=idx],
            None => "/",
        };
        format!("{base}{target}")
    };

    Some(normalize_path(&remove_dot_segments(&raw_path)))
}

fn path_after_authority(rest: &str) -> String {
    match rest.find('/') {
        Some(idx) => rest[idx..].to_string(),
        None => "/".to_string(),
    }
}

fn has_scheme(target: &str) -> bool {
    match target.find(':') {
        Some(idx) => {
            let scheme = &target[..idx];
            !scheme.is_empty()
                && !scheme.contains('/')
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

fn remove_dot_segments(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/').skip(1) {
        match segment {
            "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    // A trailing "." or ".." names a directory.
    if matches!(path.rsplit('/').next(), Some("." | "..")) {
        segments.push("");
    }
    format!("/{}", segments.join("/"))
}

/// Whether `link` designates the current page.
#[must_use]
pub fn is_current(doc: &Document, link: NodeId, page_id: Option<&str>, current: &str) -> bool {
    let nav_id = doc.attr(link, "data-nav").map(str::trim).filter(|v| !v.is_empty());
    if let (Some(nav_id), Some(page_id)) = (nav_id, page_id) {
        return nav_id == page_id;
    }
    let Some(href) = doc.attr(link, "href") else {
        return false;
    };
    resolve_href(href, current).is_some_and(|resolved| resolved == normalize_path(current))
}

/// Marks the current link and clears every other. Returns the active link.
pub fn highlight(page: &mut Page) -> Option<NodeId> {
    let page_id = page.page_id();
    let current = page.pathname().to_string();
    let mut active = None;
    for link in links(&page.document) {
        let matches = active.is_none() && is_current(&page.document, link, page_id.as_deref(), &current);
        if matches {
            active = Some(link);
            page.document.add_class(link, ACTIVE_CLASS);
            page.document.set_attr(link, "aria-current", "page");
        } else {
            page.document.remove_class(link, ACTIVE_CLASS);
            page.document.remove_attr(link, "aria-current");
        }
    }
    tracing::trace!(?active, path = %current, "navigation highlighted");
    active
}

/// Click on a navigation link: publish `nav:change` and re-highlight on the
/// next tick, after a client-side router had its chance to update the path.
pub fn on_link_click(page: &mut Page, link: NodeId) {
    let href = page.document.attr(link, "href").unwrap_or_default().to_string();
    page.publish(SprintEvent::NavChange { href });
    page.scheduler.next_tick(Task::HighlightNav);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dom::El;
    use proptest::prelude::*;

    fn nav_page(path: &str, page_id: Option<&str>, links: &[(&str, Option<&str>)]) -> Page {
        let mut doc = Document::at(path);
        let body = doc.body();
        if let Some(id) = page_id {
            doc.set_attr(body, "data-page", id);
        }
        doc.append_tree(
            body,
            El::new("nav").component(COMPONENT).children(links.iter().map(|(href, nav)| {
                let el = El::new("a").attr("href", *href);
                match nav {
                    Some(nav) => el.attr("data-nav", *nav),
                    None => el,
                }
            })),
        );
        Page::new(doc, Config::default())
    }

    #[test]
    fn normalize_trims_trailing_slashes() {
        assert_eq!(normalize_path("/setup/"), "/setup");
        assert_eq!(normalize_path("/setup//"), "/setup");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn resolve_handles_absolute_relative_and_full_urls() {
        assert_eq!(resolve_href("/goals/", "/setup").as_deref(), Some("/goals"));
        assert_eq!(resolve_href("goals", "/app/setup").as_deref(), Some("/app/goals"));
        assert_eq!(resolve_href("../goals", "/app/setup/step").as_deref(), Some("/app/goals"));
        assert_eq!(resolve_href("./", "/app/setup").as_deref(), Some("/app"));
        assert_eq!(
            resolve_href("https://example.com/setup?x=1#top", "/").as_deref(),
            Some("/setup")
        );
        assert_eq!(resolve_href("//cdn.example.com", "/a").as_deref(), Some("/"));
        assert_eq!(resolve_href("#section", "/setup/").as_deref(), Some("/setup"));
    }

    #[test]
    fn resolve_rejects_non_path_targets() {
        assert_eq!(resolve_href("mailto:team@example.com", "/"), None);
        assert_eq!(resolve_href("javascript:void(0)", "/"), None);
        assert_eq!(resolve_href("ftp://example.com/setup", "/setup"), None);
        assert_eq!(resolve_href("   ", "/"), None);
    }

    #[test]
    fn page_identifier_takes_priority_over_path() {
        let mut page = nav_page("/somewhere", Some("goals"), &[("/setup", Some("setup")), ("/x", Some("goals"))]);
        let active = highlight(&mut page);
        let links = links(page.document());
        assert_eq!(active, Some(links[1]));
        assert_eq!(page.document().attr(links[1], "aria-current"), Some("page"));
        assert!(!page.document().has_class(links[0], ACTIVE_CLASS));
    }

    #[test]
    fn path_match_is_used_without_identifiers() {
        let mut page = nav_page("/setup/", None, &[("/", None), ("/setup", None)]);
        let links = links(page.document());
        assert_eq!(highlight(&mut page), Some(links[1]));
    }

    #[test]
    fn stale_marks_are_cleared() {
        let mut page = nav_page("/a", None, &[("/a", None), ("/b", None)]);
        highlight(&mut page);
        page.document_mut().set_pathname("/b");
        let links = links(page.document());
        assert_eq!(highlight(&mut page), Some(links[1]));
        assert!(!page.document().has_class(links[0], ACTIVE_CLASS));
        assert!(!page.document().has_attr(links[0], "aria-current"));
    }

    #[test]
    fn link_click_publishes_and_defers_highlight() {
        let mut page = nav_page("/a", None, &[("/b", None)]);
        let link = links(page.document())[0];
        on_link_click(&mut page, link);
        assert_eq!(page.bus().published_count(), 1);
        assert_eq!(page.scheduler().next_deadline(), Some(0));
    }

    proptest! {
        #[test]
        fn at_most_one_link_is_active(
            hrefs in proptest::collection::vec(prop_oneof![
                Just("/"), Just("/setup"), Just("/setup/"), Just("setup"), Just("/goals"), Just("#")
            ], 0..8),
            path in prop_oneof![Just("/"), Just("/setup"), Just("/goals/")],
        ) {
            let entries: Vec<(&str, Option<&str>)> = hrefs.iter().map(|h| (*h, None)).collect();
            let mut page = nav_page(path, None, &entries);
            highlight(&mut page);
            let doc = page.document();
            let active = links(doc).into_iter().filter(|l| doc.has_class(*l, ACTIVE_CLASS)).count();
            let current = links(doc).into_iter().filter(|l| doc.has_attr(*l, "aria-current")).count();
            prop_assert!(active <= 1);
            prop_assert_eq!(active, current);
        }
    }
}
