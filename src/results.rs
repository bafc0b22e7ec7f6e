use serde::{Deserialize, Serialize};

/// Represents one diary entry extracted from a rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL of the entry
    pub url: String,

    /// Timestamp line exactly as displayed on the page (if it could be read)
    pub date: Option<String>,

    /// Space-joined paragraph text; `None` means extraction failed, which is
    /// distinct from `Some("")` for an entry with no paragraphs
    pub content: Option<String>,
}

impl Post {
    /// Create a new post
    pub fn new(url: String, date: Option<String>, content: Option<String>) -> Self {
        Self { url, date, content }
    }
}

/// Everything a single crawl collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlReport {
    /// Journal title read from the seed page heading (if present)
    pub title: Option<String>,

    /// Extracted entries in traversal order: the seed page first, then the
    /// linked entries in the order the entry list presented them
    pub posts: Vec<Post>,
}

impl CrawlReport {
    /// Create a new crawl report
    pub fn new(title: Option<String>, posts: Vec<Post>) -> Self {
        Self { title, posts }
    }
}
