#![deny(missing_docs)]
//! mdfrag core: regex-driven Markdown to HTML fragment conversion, heading
//! anchors and table-of-contents extraction.

/// Line classifier for lists, tables and paragraphs.
pub mod blocks;
/// The end-to-end conversion pipeline.
pub mod convert;
/// Conversion error type.
pub mod error;
/// Conversion options.
pub mod options;
/// Slug generation and heading ids.
pub mod slug;
/// Inline and heading substitutions.
pub mod substitute;
/// Table-of-contents extraction.
pub mod toc;

pub use blocks::{BlockMode, ListKind, classify_blocks};
pub use convert::{Conversion, convert, convert_file, convert_markdown_to_html, normalize_newlines};
pub use error::ConvertError;
pub use options::{Badge, ConvertOptions};
pub use slug::{add_heading_ids, slugify, strip_tags};
pub use substitute::substitute;
pub use toc::{TocEntry, extract_toc, write_toc_json};
