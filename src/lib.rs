// Re-export modules
pub mod config;
pub mod crawler;
pub mod error;
pub mod parsers;
pub mod results;
pub mod selectors;
pub mod session;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::CrawlError;
pub use results::{CrawlReport, Post};

use config::CrawlConfig;

/// Main builder for crawling a diary
pub struct Crawl {
    config: CrawlConfig,
}

impl Crawl {
    /// Create a new Crawl builder starting from the given entry URL
    pub fn new(start_url: &str) -> Self {
        Self {
            config: CrawlConfig::new(start_url),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = CrawlConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = CrawlConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the WebDriver server URL
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Set the lower bound in seconds for every randomized pause
    pub fn with_delay_floor(mut self, seconds: f64) -> Self {
        self.config.delay_floor_secs = seconds;
        self
    }

    /// Set the upper bound in seconds for the pause after the seed page loads
    pub fn with_init_delay(mut self, seconds: f64) -> Self {
        self.config.init_delay_secs = seconds;
        self
    }

    /// Set the upper bound in seconds for the pause between entries
    pub fn with_entry_delay(mut self, seconds: f64) -> Self {
        self.config.entry_delay_secs = seconds;
        self
    }

    /// Run the crawl and collect every post into a report
    pub async fn run(mut self) -> Result<CrawlReport, CrawlError> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        crawler::run(&self.config).await
    }
}
