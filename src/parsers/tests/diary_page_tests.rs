use crate::parsers::entry;
use crate::selectors::{SelectorConfig, SelectorSet};
use scraper::Html;
use url::Url;

/// A trimmed-down diary entry page with the markup the crawler cares about
const DIARY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>my-diary.org</title></head>
<body>
  <button class="fc-button fc-cta-consent fc-primary-button">Consent</button>
  <h5 class="heading text-center">DailyLog 2023</h5>
  <div id="entry">
    <div id="mainentrydiv">
      <div class="col">
        <div>2023-10-19 07:12:43 (UTC)</div>
        <p>Ran 5k.</p>
        <p>Felt great.</p>
      </div>
    </div>
  </div>
  <button id="entrylist_btn">Show older entries</button>
  <div id="entries-list">
    <a class="entry" href="/read/e/111/yesterday">Yesterday</a>
    <a class="entry" href="https://www.my-diary.org/read/e/222/last-week">Last week</a>
    <a class="sidebar" href="/read/e/333/ignored">Sidebar</a>
    <a class="entry" href="/edit/e/444/ignored">Edit</a>
  </div>
</body>
</html>"#;

#[cfg(test)]
mod full_page_tests {
    use super::*;

    fn page() -> Html {
        Html::parse_document(DIARY_PAGE)
    }

    fn selectors() -> SelectorSet {
        SelectorSet::new(&SelectorConfig::default()).unwrap()
    }

    fn page_url() -> Url {
        Url::parse("https://www.my-diary.org/read/e/546661233/seed").unwrap()
    }

    #[test]
    fn test_every_field_extracts_from_one_page() {
        let doc = page();
        let selectors = selectors();

        assert_eq!(entry::title(&doc, &selectors).as_deref(), Some("DailyLog 2023"));
        assert_eq!(
            entry::date(&doc, &selectors).as_deref(),
            Some("2023-10-19 07:12:43 (UTC)")
        );
        assert_eq!(entry::content(&doc, &selectors), "Ran 5k. Felt great.");
    }

    #[test]
    fn test_entry_links_keep_order_and_skip_non_entries() {
        let links = entry::entry_links(&page(), &selectors(), &page_url());
        assert_eq!(
            links,
            vec![
                "https://www.my-diary.org/read/e/111/yesterday",
                "https://www.my-diary.org/read/e/222/last-week",
            ]
        );
    }

    #[test]
    fn test_overridden_selectors_drive_extraction() {
        let config = SelectorConfig {
            title: "head title".to_string(),
            ..SelectorConfig::default()
        };
        let selectors = SelectorSet::new(&config).unwrap();

        assert_eq!(
            entry::title(&page(), &selectors).as_deref(),
            Some("my-diary.org")
        );
    }
}
