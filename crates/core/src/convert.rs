//! The conversion pipeline: substitutions, block classification, heading
//! ids, table of contents.

use std::borrow::Cow;
use std::path::Path;

use crate::blocks::classify_blocks;
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::slug::add_heading_ids;
use crate::substitute::substitute;
use crate::toc::{TocEntry, extract_toc};

/// Output of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The HTML fragment, headings carrying their `id` attributes.
    pub html: String,
    /// Entries for the configured table-of-contents level.
    pub toc: Vec<TocEntry>,
}

/// Converts markdown to an HTML fragment without heading ids.
pub fn convert_markdown_to_html(input: &str, options: &ConvertOptions) -> String {
    let html = substitute(input, &options.badges);
    classify_blocks(&html)
}

/// Converts markdown, adds heading ids and extracts the table of contents.
pub fn convert(input: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    options.validate()?;

    log::info!("Converting markdown to HTML");
    let html = convert_markdown_to_html(input, options);

    log::info!("Adding heading IDs");
    let html = add_heading_ids(&html, &options.anchor_levels)?;

    log::info!("Extracting TOC");
    let toc = extract_toc(&html, options.toc_level)?;
    log::debug!("{} TOC entries at level {}", toc.len(), options.toc_level);

    Ok(Conversion { html, toc })
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Reads `input`, converts it and writes the fragment to `output`.
///
/// Line endings are normalised to `\n` before conversion.
/// Nothing is cleaned up if the write fails part way.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();

    log::info!("Reading {}", input.display());
    let markdown = std::fs::read_to_string(input).map_err(|err| ConvertError::io(input, err))?;

    let conversion = convert(&normalize_newlines(&markdown), options)?;

    log::info!("Writing HTML to {}", output.display());
    std::fs::write(output, &conversion.html).map_err(|err| ConvertError::io(output, err))?;

    Ok(conversion)
}
