//! Table-of-contents extraction from converted HTML.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::{ConvertError, check_level};
use crate::slug::strip_tags;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Anchor id of the heading.
    pub slug: String,
    /// Heading text with markup removed.
    pub title: String,
}

/// Collects `<hN id="...">` headings at `level`, in document order.
///
/// Headings with an empty id are skipped. Slugs are not deduplicated;
/// repeats are reported through `log::warn!` and kept.
pub fn extract_toc(html: &str, level: u8) -> Result<Vec<TocEntry>, ConvertError> {
    let level = check_level(level)?;
    let pattern = Regex::new(&format!(r#"<h{level} id="([^"]+)">(.+?)</h{level}>"#))?;

    let mut seen = HashSet::new();
    let entries = pattern
        .captures_iter(html)
        .map(|caps| {
            let slug = caps[1].to_string();
            if !seen.insert(slug.clone()) {
                log::warn!("duplicate heading anchor #{slug} in table of contents");
            }
            TocEntry {
                slug,
                title: strip_tags(&caps[2]),
            }
        })
        .collect();

    Ok(entries)
}

/// Writes `entries` as a pretty-printed JSON array.
pub fn write_toc_json(path: impl AsRef<Path>, entries: &[TocEntry]) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json).map_err(|err| ConvertError::io(path, err))
}
