use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::selectors::SelectorConfig;

/// Seed entry the crawl starts from when no other URL is given
pub const DEFAULT_START_URL: &str =
    "https://www.my-diary.org/read/e/546661233/unknown%3A-today%E2%80%99s-workout%E2%80%A6#blue";

/// Configuration for a diary crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL of the diary entry to start crawling from
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Directory the extracted entries are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Lower bound in seconds for every randomized pause
    #[serde(default = "default_delay_floor_secs")]
    pub delay_floor_secs: f64,

    /// Upper bound in seconds for the pause after loading the seed page
    #[serde(default = "default_init_delay_secs")]
    pub init_delay_secs: f64,

    /// Upper bound in seconds for the pause between visited entries
    #[serde(default = "default_entry_delay_secs")]
    pub entry_delay_secs: f64,

    /// CSS selectors for the diary markup
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            webdriver_url: default_webdriver_url(),
            out_dir: default_out_dir(),
            delay_floor_secs: default_delay_floor_secs(),
            init_delay_secs: default_init_delay_secs(),
            entry_delay_secs: default_entry_delay_secs(),
            selectors: SelectorConfig::default(),
        }
    }
}

/// Default value for start_url
fn default_start_url() -> String {
    DEFAULT_START_URL.to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default output directory
fn default_out_dir() -> String {
    "data".to_string()
}

/// Default lower bound for randomized pauses
fn default_delay_floor_secs() -> f64 {
    0.05
}

/// Default upper bound for the pause after the seed page loads
fn default_init_delay_secs() -> f64 {
    2.21
}

/// Default upper bound for the pause between entries
fn default_entry_delay_secs() -> f64 {
    0.195
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = CrawlConfig::from_json("{}").unwrap();

        assert_eq!(config.start_url, DEFAULT_START_URL);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.out_dir, "data");
        assert_eq!(config.delay_floor_secs, 0.05);
        assert_eq!(config.init_delay_secs, 2.21);
        assert_eq!(config.entry_delay_secs, 0.195);
    }

    #[test]
    fn test_partial_json_keeps_remaining_defaults() {
        let json = r#"{
            "start_url": "https://www.my-diary.org/read/e/1/first",
            "entry_delay_secs": 1.5,
            "selectors": { "title": "h1.journal" }
        }"#;
        let config = CrawlConfig::from_json(json).unwrap();

        assert_eq!(config.start_url, "https://www.my-diary.org/read/e/1/first");
        assert_eq!(config.entry_delay_secs, 1.5);
        assert_eq!(config.init_delay_secs, 2.21);
        assert_eq!(config.selectors.title, "h1.journal");
        assert_eq!(config.selectors.date, "#mainentrydiv .col div");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(CrawlConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawl.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{ "out_dir": "archive" }}"#).unwrap();

        let config = CrawlConfig::from_file(&path).unwrap();
        assert_eq!(config.out_dir, "archive");
        assert_eq!(config.start_url, DEFAULT_START_URL);
    }
}
