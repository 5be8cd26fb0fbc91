//! Display names and file-safe names for scraped links.
//!
//! A name is first extracted from the raw value (link URL, header value); if
//! that fails the last path segment of the raw text is used. Purged names are
//! additionally sanitized for file-system use.

mod extract;
mod sanitize;

pub use extract::{parse_content_disposition_filename, LinkNameExtractor};
pub use sanitize::{purge_name, PurgeSanitizer};

use regex::Regex;
use std::sync::LazyLock;

use crate::services::{NameExtractor, Sanitizer};

static ALIAS_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d._-]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMode {
    /// Closest to the name as displayed.
    #[default]
    Strict,
    /// Sanitized for use as a file or directory name.
    Purged,
}

/// Derives a display name from `text`; never fails.
pub fn normalize_name(
    text: &str,
    mode: NameMode,
    extractor: &dyn NameExtractor,
    sanitizer: &dyn Sanitizer,
) -> String {
    let name = extractor
        .extract_name(text)
        .unwrap_or_else(|_| basename(text).trim().to_string());
    match mode {
        NameMode::Strict => name,
        NameMode::Purged => sanitizer.sanitize_name(&name),
    }
}

/// Turns an identifier into a label: `my-file_123.part` → `MyFilePart`.
pub fn alias(text: &str, extractor: &dyn NameExtractor, sanitizer: &dyn Sanitizer) -> String {
    let purged = normalize_name(text, NameMode::Purged, extractor, sanitizer);
    ALIAS_SPLIT_RE
        .split(&purged)
        .filter(|chunk| !chunk.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Text after the last `/`.
fn basename(text: &str) -> &str {
    text.rsplit('/').next().unwrap_or(text)
}
