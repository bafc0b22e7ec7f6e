use scraper::Html;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::parsers::entry;
use crate::results::{CrawlReport, Post};
use crate::selectors::SelectorSet;
use crate::session::Session;
use crate::utils;

/// How long the consent dialog gets to show up before we assume it is gone
const CONSENT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the diary title heading gets to appear
const TITLE_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the entry-list toggle gets to appear
const LIST_TOGGLE_TIMEOUT: Duration = Duration::from_secs(5);

/// How long an entry's date line gets to appear after navigation
const DATE_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the expanded entry list gets to produce links
const ENTRY_LINKS_TIMEOUT: Duration = Duration::from_secs(10);

/// Crawl the diary starting from the configured entry and collect every post.
///
/// The WebDriver session is released on every exit path once connected, so a
/// failed navigation cannot leave a browser behind.
pub async fn run(config: &CrawlConfig) -> Result<CrawlReport, CrawlError> {
    let start_url =
        Url::parse(&config.start_url).map_err(|e| CrawlError::InvalidStartUrl {
            url: config.start_url.clone(),
            source: e,
        })?;
    let selectors = SelectorSet::new(&config.selectors)?;

    let session = Session::connect(&config.webdriver_url).await?;
    let outcome = crawl(&session, config, &selectors, &start_url).await;
    session.quit().await;
    outcome
}

/// Walks the diary: seed entry first, then every linked entry once
async fn crawl(
    session: &Session,
    config: &CrawlConfig,
    selectors: &SelectorSet,
    start_url: &Url,
) -> Result<CrawlReport, CrawlError> {
    ::log::info!("Opening diary at {}", start_url);
    session.goto(start_url.as_str()).await?;
    utils::random_sleep(config.delay_floor_secs, config.init_delay_secs).await;

    dismiss_consent(session, config).await;

    let title = read_title(session, config, selectors).await;
    match &title {
        Some(title) => ::log::info!("Diary title: {}", title),
        None => ::log::warn!("Could not read the diary title"),
    }

    expand_entry_list(session, config).await;

    let mut posts = Vec::new();
    posts.push(extract_post(session, config, selectors, start_url.as_str()).await);

    let links = discover_entry_links(session, config, selectors, start_url).await?;
    ::log::info!("Found {} linked entries", links.len());

    for link in plan_visits(start_url.as_str(), links) {
        session.goto(&link).await?;
        posts.push(extract_post(session, config, selectors, &link).await);
        utils::random_sleep(config.delay_floor_secs, config.entry_delay_secs).await;
    }

    ::log::info!("Collected {} posts", posts.len());
    Ok(CrawlReport::new(title, posts))
}

/// Click the cookie-consent button away if the dialog shows up
async fn dismiss_consent(session: &Session, config: &CrawlConfig) {
    session
        .click_if_present(&config.selectors.consent_button, CONSENT_TIMEOUT, "consent dialog")
        .await;
}

/// Expand the collapsed list of older entries
async fn expand_entry_list(session: &Session, config: &CrawlConfig) {
    session
        .click_if_present(&config.selectors.list_toggle, LIST_TOGGLE_TIMEOUT, "entry list toggle")
        .await;
}

/// Read the diary title from the seed page
async fn read_title(
    session: &Session,
    config: &CrawlConfig,
    selectors: &SelectorSet,
) -> Option<String> {
    if let Err(e) = session
        .element_within(&config.selectors.title, TITLE_TIMEOUT)
        .await
    {
        ::log::warn!("Diary title never appeared: {}", e);
        return None;
    }

    let html = match session.source().await {
        Ok(html) => html,
        Err(e) => {
            ::log::warn!("Failed to read page source for the title: {}", e);
            return None;
        }
    };

    let doc = Html::parse_document(&html);
    entry::title(&doc, selectors)
}

/// Extract the date and content of the entry currently displayed.
///
/// Extraction is best effort: a missing date or an unreadable page yields a
/// post with absent fields rather than an error, and the crawl moves on.
async fn extract_post(
    session: &Session,
    config: &CrawlConfig,
    selectors: &SelectorSet,
    url: &str,
) -> Post {
    if let Err(e) = session
        .element_within(&config.selectors.date, DATE_TIMEOUT)
        .await
    {
        ::log::warn!("Date line never appeared on {}: {}", url, e);
    }

    let html = match session.source().await {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Failed to read page source for {}: {}", url, e);
            return Post::new(url.to_string(), None, None);
        }
    };

    let doc = Html::parse_document(&html);
    let date = entry::date(&doc, selectors);
    if date.is_none() {
        ::log::warn!("No date found on {}", url);
    }
    let content = entry::content(&doc, selectors);
    ::log::debug!("Extracted {} bytes of content from {}", content.len(), url);

    Post::new(url.to_string(), date, Some(content))
}

/// Collect the links to older entries from the expanded list.
///
/// Unlike the field reads this one is fatal on timeout; a diary page without
/// an entry list means the crawl has nothing left to do.
async fn discover_entry_links(
    session: &Session,
    config: &CrawlConfig,
    selectors: &SelectorSet,
    base: &Url,
) -> Result<Vec<String>, CrawlError> {
    session
        .element_within(&config.selectors.entry_links, ENTRY_LINKS_TIMEOUT)
        .await
        .map_err(|e| CrawlError::EntryLinks { source: e })?;

    let html = session
        .source()
        .await
        .map_err(|e| CrawlError::EntryLinks { source: e })?;

    let doc = Html::parse_document(&html);
    Ok(entry::entry_links(&doc, selectors, base))
}

/// Decide which discovered links get visited, preserving list order.
///
/// The seed URL counts as visited from the start; every link must enter the
/// visited set exactly once, so duplicates and links back to the seed are
/// skipped.
fn plan_visits(start_url: &str, links: Vec<String>) -> Vec<String> {
    let mut visited = HashSet::new();
    visited.insert(start_url.to_string());

    let mut plan = Vec::new();
    for link in links {
        if !visited.insert(link.clone()) {
            ::log::debug!("Already visited {}, skipping", link);
            continue;
        }
        plan.push(link);
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "https://www.my-diary.org/read/e/546661233/seed";

    fn links(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_distinct_links_are_visited_in_list_order() {
        let discovered = links(&[
            "https://www.my-diary.org/read/e/1/a",
            "https://www.my-diary.org/read/e/2/b",
            "https://www.my-diary.org/read/e/3/c",
        ]);

        assert_eq!(plan_visits(SEED, discovered.clone()), discovered);
    }

    #[test]
    fn test_duplicate_link_is_visited_once() {
        let plan = plan_visits(
            SEED,
            links(&[
                "https://www.my-diary.org/read/e/1/a",
                "https://www.my-diary.org/read/e/2/b",
                "https://www.my-diary.org/read/e/1/a",
            ]),
        );

        assert_eq!(
            plan,
            links(&[
                "https://www.my-diary.org/read/e/1/a",
                "https://www.my-diary.org/read/e/2/b",
            ])
        );
    }

    #[test]
    fn test_link_back_to_seed_is_skipped() {
        let plan = plan_visits(SEED, links(&[SEED, "https://www.my-diary.org/read/e/1/a"]));

        assert_eq!(plan, links(&["https://www.my-diary.org/read/e/1/a"]));
    }

    #[test]
    fn test_empty_link_list_is_an_empty_plan() {
        assert!(plan_visits(SEED, Vec::new()).is_empty());
    }
}
