//! Whole-text regex substitutions: ATX headings, emphasis, inline code,
//! links and evidence badges.
//!
//! Order matters. Headings run first so their `#` markers are gone before
//! anything else looks at the line, and triple emphasis runs before double
//! and single.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::Badge;

/// `(pattern, replacement)` pairs for ATX headings, deepest level first.
static HEADINGS: Lazy<[(Regex, &'static str); 3]> = Lazy::new(|| {
    [
        (compile(r"(?m)^### (.+)$"), "<h3>$1</h3>"),
        (compile(r"(?m)^## (.+)$"), "<h2>$1</h2>"),
        (compile(r"(?m)^# (.+)$"), "<h1>$1</h1>"),
    ]
});

static INLINE: Lazy<[(Regex, &'static str); 5]> = Lazy::new(|| {
    [
        (compile(r"\*\*\*(.+?)\*\*\*"), "<strong><em>$1</em></strong>"),
        (compile(r"\*\*(.+?)\*\*"), "<strong>$1</strong>"),
        (compile(r"\*(.+?)\*"), "<em>$1</em>"),
        (compile(r"`([^`]+)`"), "<code>$1</code>"),
        (compile(r"\[([^\]]+)\]\(([^\)]+)\)"), r#"<a href="$2">$1</a>"#),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("built-in pattern {pattern:?}: {err}"))
}

/// Rewrites `#`, `##` and `###` lines into `<h1>`-`<h3>` elements.
pub fn apply_headings(input: &str) -> String {
    apply_all(input, HEADINGS.iter())
}

/// Rewrites emphasis, inline code and links, in that order.
pub fn apply_inline(input: &str) -> String {
    apply_all(input, INLINE.iter())
}

/// Replaces every `[TOKEN]` occurrence with its badge span.
pub fn apply_badges(input: &str, badges: &[Badge]) -> String {
    let mut out = input.to_string();
    for badge in badges {
        let pattern = badge.pattern();
        if out.contains(&pattern) {
            out = out.replace(&pattern, &badge.to_html());
        }
    }
    out
}

/// Runs every substitution in document order.
pub fn substitute(input: &str, badges: &[Badge]) -> String {
    let html = apply_headings(input);
    let html = apply_inline(&html);
    apply_badges(&html, badges)
}

fn apply_all<'a>(input: &str, rules: impl Iterator<Item = &'a (Regex, &'static str)>) -> String {
    let mut current = input.to_string();
    for (pattern, replacement) in rules {
        let next = pattern.replace_all(&current, *replacement).into_owned();
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ConvertOptions;

    #[test]
    fn headings_by_level() {
        assert_eq!(apply_headings("# Title"), "<h1>Title</h1>");
        assert_eq!(apply_headings("## Part"), "<h2>Part</h2>");
        assert_eq!(apply_headings("### Detail"), "<h3>Detail</h3>");
    }

    #[test]
    fn headings_only_at_line_start() {
        assert_eq!(apply_headings("text # not heading"), "text # not heading");
        assert_eq!(apply_headings("intro\n## Part\nbody"), "intro\n<h2>Part</h2>\nbody");
    }

    #[test]
    fn level_four_left_alone() {
        assert_eq!(apply_headings("#### Deep"), "#### Deep");
        assert_eq!(apply_headings("#NoSpace"), "#NoSpace");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(apply_inline("**bold**"), "<strong>bold</strong>");
        assert_eq!(apply_inline("*italic*"), "<em>italic</em>");
        assert_eq!(
            apply_inline("***both*** **b** *i*"),
            "<strong><em>both</em></strong> <strong>b</strong> <em>i</em>"
        );
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        assert_eq!(apply_inline("*open\nclose*"), "*open\nclose*");
    }

    #[test]
    fn inline_code() {
        assert_eq!(apply_inline("`code`"), "<code>code</code>");
        assert_eq!(apply_inline("run `cargo fmt` now"), "run <code>cargo fmt</code> now");
    }

    #[test]
    fn links() {
        assert_eq!(
            apply_inline("see [docs](https://example.com/a)"),
            r#"see <a href="https://example.com/a">docs</a>"#
        );
    }

    #[test]
    fn badges_use_fixed_spans() {
        let badges = ConvertOptions::default().badges;
        assert_eq!(
            apply_badges("[PROVEN] claim", &badges),
            "<span class=\"evidence-badge evidence-proven\">PROVEN</span> claim"
        );
        assert_eq!(
            apply_badges("[SUPPORTED]", &badges),
            "<span class=\"evidence-badge evidence-supported\">SUPPORTED</span>"
        );
        assert_eq!(apply_badges("[UNKNOWN]", &badges), "[UNKNOWN]");
    }

    #[test]
    fn badge_followed_by_parens_becomes_link() {
        let badges = ConvertOptions::default().badges;
        assert_eq!(
            substitute("[PROVEN](#evidence)", &badges),
            r##"<a href="#evidence">PROVEN</a>"##
        );
    }

    #[test]
    fn heading_content_gets_inline_markup() {
        let badges = ConvertOptions::default().badges;
        assert_eq!(
            substitute("## The **core** idea [PROVEN]", &badges),
            "<h2>The <strong>core</strong> idea \
             <span class=\"evidence-badge evidence-proven\">PROVEN</span></h2>"
        );
    }
}
