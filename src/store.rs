use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::results::CrawlReport;

/// Directory name used when the diary title could not be read
pub const UNTITLED_DIR: &str = "untitled";

/// Turn a diary title into a directory name
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase().replace(' ', "_")
}

/// A single path component that names a real directory entry: not empty, not
/// a relative component, no separators or NUL
fn is_safe_component(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

/// Derive an entry's file name from its date line.
///
/// Returns `None` when the date cannot form a usable file name: empty,
/// a relative path component, or containing a separator or NUL.
pub fn entry_filename(date: &str) -> Option<String> {
    if !is_safe_component(date) {
        return None;
    }
    Some(format!("{date}.txt"))
}

/// Write every complete post to `out_dir/<normalized title>/<date>.txt`.
///
/// A title whose normalized form cannot name a directory falls back to
/// `untitled`. Posts missing a date or content, or whose date cannot form a
/// file name, are skipped with a warning. Recurring date strings overwrite,
/// so the last post written for a date wins. Returns the paths written.
pub fn save_posts(report: &CrawlReport, out_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let dir_name = match report.title.as_deref().map(normalize_title) {
        Some(name) if is_safe_component(&name) => name,
        _ => {
            ::log::warn!("No usable diary title, writing entries under {:?}", UNTITLED_DIR);
            UNTITLED_DIR.to_string()
        }
    };

    let dir = out_dir.join(dir_name);
    fs::create_dir_all(&dir)?;

    let mut written = Vec::new();
    for post in &report.posts {
        let Some(date) = post.date.as_deref() else {
            ::log::warn!("Skipping {}: no date found", post.url);
            continue;
        };
        let Some(filename) = entry_filename(date) else {
            ::log::warn!("Skipping {}: date {:?} does not name a file", post.url, date);
            continue;
        };
        let Some(content) = post.content.as_deref() else {
            ::log::warn!("Skipping {}: no content extracted", post.url);
            continue;
        };

        let path = dir.join(filename);
        fs::write(&path, content)?;
        ::log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        written.push(path);
    }

    Ok(written)
}
