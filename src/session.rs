use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use std::time::Duration;

use crate::error::CrawlError;

/// Alternative WebDriver endpoints probed when the configured URL refuses
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// A live browser session.
///
/// Owns the WebDriver client for the duration of one crawl; `quit` hands the
/// session back to the server. Callers are expected to route every exit path
/// through `quit` so the browser is not left orphaned.
pub struct Session {
    client: Client,
}

impl Session {
    /// Connect to the WebDriver server, probing fallback endpoints if the
    /// configured URL refuses
    pub async fn connect(webdriver_url: &str) -> Result<Self, CrawlError> {
        let primary_error = match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
                e
            }
        };

        for url in FALLBACK_WEBDRIVER_URLS.iter() {
            if *url == webdriver_url {
                continue; // Skip if it's the same as the one we already tried
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            match ClientBuilder::native().connect(url).await {
                Ok(client) => {
                    ::log::debug!("Connected to fallback WebDriver at {}", url);
                    return Ok(Self { client });
                }
                Err(_) => {
                    // Don't log error for fallbacks to avoid log spam
                }
            }
        }

        ::log::error!("Failed to connect to any WebDriver servers");
        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(CrawlError::Connect {
            url: webdriver_url.to_string(),
            source: primary_error,
        })
    }

    /// Navigate the browser to a URL
    pub async fn goto(&self, url: &str) -> Result<(), CrawlError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| CrawlError::Navigation {
                url: url.to_string(),
                source: e,
            })
    }

    /// Get the source of the current page
    pub async fn source(&self) -> Result<String, CmdError> {
        self.client.source().await
    }

    /// Wait up to `timeout` for an element matching `css` to appear
    pub async fn element_within(
        &self,
        css: &str,
        timeout: Duration,
    ) -> Result<Element, CmdError> {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(css))
            .await
    }

    /// Click the element matching `css` if it shows up within `timeout`.
    ///
    /// Absence and click failures are logged and reported as `false`; the
    /// caller decides whether the page is still worth scraping.
    pub async fn click_if_present(&self, css: &str, timeout: Duration, what: &str) -> bool {
        let element = match self.element_within(css, timeout).await {
            Ok(element) => element,
            Err(e) => {
                ::log::warn!("No {} found ({}): {}", what, css, e);
                return false;
            }
        };

        match element.click().await {
            Ok(()) => {
                ::log::debug!("Clicked {}", what);
                true
            }
            Err(e) => {
                ::log::warn!("Failed to click {}: {}", what, e);
                false
            }
        }
    }

    /// End the session and release the browser
    pub async fn quit(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}
