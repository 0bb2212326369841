//! Single-pass line classifier for lists, tables and paragraphs.
//!
//! Runs after the inline substitutions, so heading lines already start with
//! `<h` and pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("ordered item pattern"));
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s+").expect("unordered item pattern"));

/// Which list wrapper is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1. item` lines, wrapped in `<ol>`.
    Ordered,
    /// `- item` lines, wrapped in `<ul>`.
    Unordered,
}

impl ListKind {
    /// HTML element name for the wrapper.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// Cursor state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    /// Outside any wrapper.
    #[default]
    Text,
    /// Inside an open `<ol>` or `<ul>`.
    List(ListKind),
    /// Inside an open `<table>`, after its `<tbody>`.
    Table,
}

/// Splits a list line into its kind and item text, if it is one.
pub fn list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(marker) = ORDERED_ITEM.find(line) {
        return Some((ListKind::Ordered, &line[marker.end()..]));
    }
    if let Some(marker) = UNORDERED_ITEM.find(line) {
        return Some((ListKind::Unordered, &line[marker.end()..]));
    }
    None
}

/// Cells of a pipe-delimited row, trimmed, with empty cells dropped.
pub fn table_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split('|').map(str::trim).filter(|cell| !cell.is_empty())
}

struct Classifier {
    out: Vec<String>,
    mode: BlockMode,
}

impl Classifier {
    fn new() -> Self {
        Self {
            out: Vec::new(),
            mode: BlockMode::Text,
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.out.push(line.into());
    }

    /// Emits the closing tags for whatever wrapper is open.
    fn close(&mut self) {
        match self.mode {
            BlockMode::Text => {}
            BlockMode::List(kind) => self.push(format!("</{}>", kind.tag())),
            BlockMode::Table => self.push("</tbody></table>"),
        }
        self.mode = BlockMode::Text;
    }

    fn open_table(&mut self, header: &str) {
        self.close();
        self.push("<table>");
        self.push("<thead><tr>");
        for cell in table_cells(header) {
            self.push(format!("<th>{cell}</th>"));
        }
        self.push("</tr></thead>");
        self.push("<tbody>");
        self.mode = BlockMode::Table;
    }

    fn table_row(&mut self, line: &str) {
        self.push("<tr>");
        for cell in table_cells(line) {
            self.push(format!("<td>{cell}</td>"));
        }
        self.push("</tr>");
    }

    fn list_item(&mut self, kind: ListKind, item: &str) {
        if self.mode != BlockMode::List(kind) {
            self.close();
            self.push(format!("<{}>", kind.tag()));
            self.mode = BlockMode::List(kind);
        }
        self.push(format!("<li>{item}</li>"));
    }

    fn text(&mut self, line: &str) {
        self.close();
        if line.trim().is_empty() {
            return;
        }
        if line.starts_with('<') {
            self.push(line);
        } else {
            self.push(format!("<p>{line}</p>"));
        }
    }

    fn finish(mut self) -> String {
        self.close();
        self.out.join("\n")
    }
}

/// Wraps list runs, pipe tables and loose lines in their HTML elements.
///
/// The line after a table header is skipped whenever it contains a `|`,
/// on the assumption that it is the `|---|` separator row.
pub fn classify_blocks(input: &str) -> String {
    let mut classifier = Classifier::new();
    let mut lines = input.split('\n');

    while let Some(line) = lines.next() {
        let is_row = line.contains('|');

        if is_row {
            if classifier.mode == BlockMode::Table {
                classifier.table_row(line);
            } else {
                classifier.open_table(line);
                if let Some(next) = lines.next() {
                    if next.contains('|') {
                        log::debug!("skipping table separator {next:?}");
                    } else {
                        // Header without a separator: the next line is
                        // classified as usual, which closes the table.
                        classifier.close();
                        classify_plain(&mut classifier, next);
                    }
                }
            }
            continue;
        }

        classify_plain(&mut classifier, line);
    }

    classifier.finish()
}

fn classify_plain(classifier: &mut Classifier, line: &str) {
    match list_item(line) {
        Some((kind, item)) => classifier.list_item(kind, item),
        None => classifier.text(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_items_share_one_list() {
        assert_eq!(
            classify_blocks("- one\n- two\n- three"),
            "<ul>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ul>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            classify_blocks("1. first\n2.  second"),
            "<ol>\n<li>first</li>\n<li>second</li>\n</ol>"
        );
    }

    #[test]
    fn switching_list_kind_reopens() {
        assert_eq!(
            classify_blocks("- a\n1. b"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn blank_line_closes_list() {
        assert_eq!(
            classify_blocks("- a\n\n- b"),
            "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn paragraphs_and_passthrough() {
        assert_eq!(
            classify_blocks("<h1>Title</h1>\n\nSome text.\n   \n<div>raw</div>"),
            "<h1>Title</h1>\n<p>Some text.</p>\n<div>raw</div>"
        );
    }

    #[test]
    fn dash_without_space_is_text() {
        assert_eq!(classify_blocks("-dash"), "<p>-dash</p>");
        assert_eq!(classify_blocks("3.14 is pi"), "<p>3.14 is pi</p>");
    }

    #[test]
    fn table_with_separator() {
        let input = "| Name | Value |\n|------|-------|\n| a | 1 |\n| b | 2 |\nafter";
        let expected = [
            "<table>",
            "<thead><tr>",
            "<th>Name</th>",
            "<th>Value</th>",
            "</tr></thead>",
            "<tbody>",
            "<tr>",
            "<td>a</td>",
            "<td>1</td>",
            "</tr>",
            "<tr>",
            "<td>b</td>",
            "<td>2</td>",
            "</tr>",
            "</tbody></table>",
            "<p>after</p>",
        ]
        .join("\n");
        assert_eq!(classify_blocks(input), expected);
    }

    #[test]
    fn second_row_is_always_skipped() {
        let out = classify_blocks("| h |\n| not a separator |\n| row |");
        assert!(!out.contains("not a separator"));
        assert!(out.contains("<td>row</td>"));
    }

    #[test]
    fn table_at_end_is_closed() {
        let out = classify_blocks("| h |\n|---|\n| x |");
        assert!(out.ends_with("</tr>\n</tbody></table>"), "got: {out}");
    }

    #[test]
    fn table_header_without_separator() {
        assert_eq!(
            classify_blocks("| h |\n- item"),
            "<table>\n<thead><tr>\n<th>h</th>\n</tr></thead>\n<tbody>\n</tbody></table>\n<ul>\n<li>item</li>\n</ul>"
        );
    }

    #[test]
    fn table_closes_open_list() {
        let out = classify_blocks("- item\n| h |\n|---|");
        assert!(out.starts_with("<ul>\n<li>item</li>\n</ul>\n<table>"), "got: {out}");
    }

    #[test]
    fn list_item_parsing() {
        assert_eq!(list_item("12. twelve"), Some((ListKind::Ordered, "twelve")));
        assert_eq!(list_item("-   spaced"), Some((ListKind::Unordered, "spaced")));
        assert_eq!(list_item(" - indented"), None);
    }
}
