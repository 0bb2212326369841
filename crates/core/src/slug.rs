//! Slug generation and heading `id` attributes.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{ConvertError, check_level};

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("disallowed pattern"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").expect("separator pattern"));

/// Removes every `<...>` tag, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Derives an anchor slug from heading content.
///
/// Tags are stripped, the text is lowercased, anything that is not a word
/// character, whitespace or `-` is dropped, and runs of whitespace and
/// hyphens collapse to a single `-`. Leading and trailing separators are
/// kept, and nothing is done about collisions.
///
/// # Examples
///
/// ```
/// use mdfrag_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("The <em>Core</em> Loop"), "the-core-loop");
/// ```
pub fn slugify(content: &str) -> String {
    let text = strip_tags(content).to_lowercase();
    let text = DISALLOWED.replace_all(&text, "");
    SEPARATORS.replace_all(&text, "-").into_owned()
}

/// Adds `id="slug"` to every bare `<hN>` element for the given levels.
///
/// Headings that already carry attributes don't match and are left alone.
pub fn add_heading_ids(html: &str, levels: &[u8]) -> Result<String, ConvertError> {
    let mut out = html.to_string();
    for &level in levels {
        let level = check_level(level)?;
        let pattern = Regex::new(&format!(r"<h{level}>(.*?)</h{level}>"))?;
        let replaced = pattern.replace_all(&out, |caps: &Captures<'_>| {
            let content = &caps[1];
            format!("<h{level} id=\"{}\">{content}</h{level}>", slugify(content))
        });
        out = replaced.into_owned();
    }
    Ok(out)
}
