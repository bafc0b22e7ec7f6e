use fantoccini::error::{CmdError, NewSessionError};

/// Errors that end a crawl.
///
/// Everything else (consent dialog, title, entry-list toggle, date and content
/// reads) is best effort: logged, converted to an absent value, and the run
/// continues.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// The configured start URL does not parse.
    #[error("invalid start URL {url:?}: {source}")]
    InvalidStartUrl { url: String, source: url::ParseError },

    /// A configured CSS selector does not parse.
    #[error("invalid CSS selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    /// No WebDriver server answered, on the configured URL or any fallback.
    #[error("failed to connect to WebDriver at {url}: {source}")]
    Connect { url: String, source: NewSessionError },

    /// Navigating the browser to a page failed.
    #[error("navigation to {url} failed: {source}")]
    Navigation { url: String, source: CmdError },

    /// The entry-link list never became available on the seed page.
    #[error("no entry links appeared in the entry list: {source}")]
    EntryLinks { source: CmdError },
}
