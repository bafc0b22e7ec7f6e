use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::CrawlError;

/// CSS selectors for the pieces of diary markup the crawler touches.
///
/// The defaults match the my-diary.org layout; every field can be overridden
/// from configuration if the site markup shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Accept button of the cookie-consent dialog shown on first load
    #[serde(default = "default_consent_button")]
    pub consent_button: String,

    /// Heading holding the journal title
    #[serde(default = "default_title")]
    pub title: String,

    /// Control that expands the collapsed list of older entries
    #[serde(default = "default_list_toggle")]
    pub list_toggle: String,

    /// Timestamp line of the entry currently displayed
    #[serde(default = "default_date")]
    pub date: String,

    /// Paragraphs of the entry currently displayed
    #[serde(default = "default_content")]
    pub content: String,

    /// Links to other entries inside the expanded entry list
    #[serde(default = "default_entry_links")]
    pub entry_links: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            consent_button: default_consent_button(),
            title: default_title(),
            list_toggle: default_list_toggle(),
            date: default_date(),
            content: default_content(),
            entry_links: default_entry_links(),
        }
    }
}

fn default_consent_button() -> String {
    ".fc-button.fc-cta-consent.fc-primary-button".to_string()
}

fn default_title() -> String {
    "h5.heading.text-center".to_string()
}

fn default_list_toggle() -> String {
    "#entrylist_btn".to_string()
}

fn default_date() -> String {
    "#mainentrydiv .col div".to_string()
}

fn default_content() -> String {
    "#entry #mainentrydiv .col p".to_string()
}

fn default_entry_links() -> String {
    r#"#entries-list a.entry[href*="read"]"#.to_string()
}

/// Compiled selectors for the fields parsed out of page-source snapshots.
///
/// Only the read selectors are compiled here; the consent button and the
/// list toggle are clicked through the WebDriver, which takes the raw CSS
/// strings and whose failures are swallowed by design.
#[derive(Debug)]
pub struct SelectorSet {
    pub title: Selector,
    pub date: Selector,
    pub content: Selector,
    pub entry_links: Selector,
}

impl SelectorSet {
    /// Compile the configured selectors, rejecting invalid CSS up front
    pub fn new(config: &SelectorConfig) -> Result<Self, CrawlError> {
        Ok(Self {
            title: compile(&config.title)?,
            date: compile(&config.date)?,
            content: compile(&config.content)?,
            entry_links: compile(&config.entry_links)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector, CrawlError> {
    Selector::parse(css).map_err(|e| CrawlError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors_compile() {
        let config = SelectorConfig::default();
        assert!(SelectorSet::new(&config).is_ok());
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let config = SelectorConfig {
            date: "div[".to_string(),
            ..SelectorConfig::default()
        };

        let err = SelectorSet::new(&config).expect_err("selector should not compile");
        match err {
            CrawlError::Selector { selector, .. } => assert_eq!(selector, "div["),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_selector_config_fills_missing_fields() {
        // A config file only has to mention the selectors it overrides
        let config: SelectorConfig =
            serde_json::from_str(r#"{ "title": "h1.journal" }"#).unwrap();

        assert_eq!(config.title, "h1.journal");
        assert_eq!(config.list_toggle, "#entrylist_btn");
        assert_eq!(config.entry_links, r#"#entries-list a.entry[href*="read"]"#);
    }
}
