use scraper::{ElementRef, Html};
use url::Url;

use crate::selectors::SelectorSet;

/// Extracts the diary title from a page-source snapshot
pub fn title(doc: &Html, selectors: &SelectorSet) -> Option<String> {
    doc.select(&selectors.title)
        .next()
        .map(|e| element_text(&e))
}

/// Extracts the timestamp line of the entry shown on the page.
///
/// The text is kept as an opaque string; nothing downstream needs it as an
/// actual timestamp.
pub fn date(doc: &Html, selectors: &SelectorSet) -> Option<String> {
    doc.select(&selectors.date)
        .next()
        .map(|e| element_text(&e))
}

/// Extracts the entry body as one line, paragraphs joined with single spaces
pub fn content(doc: &Html, selectors: &SelectorSet) -> String {
    doc.select(&selectors.content)
        .map(|e| element_text(&e))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts links to further entries, resolved against the page URL.
///
/// Links that do not resolve are logged and dropped. Order follows the
/// document; duplicates are kept and left to the caller's visited set.
pub fn entry_links(doc: &Html, selectors: &SelectorSet, base: &Url) -> Vec<String> {
    let links = doc
        .select(&selectors.entry_links)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|link| match base.join(link) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                ::log::debug!("Dropping unresolvable link {:?}: {}", link, e);
                None
            }
        })
        .collect::<Vec<String>>();

    ::log::debug!("Found {} entry links", links.len());
    links
}

/// Renders an element's text nodes as a single whitespace-collapsed line
fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
