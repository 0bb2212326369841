//! Conversion options and their YAML loading.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, check_level};

/// A bracketed token rewritten into a styled `<span>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Text between the brackets, e.g. `PROVEN` for `[PROVEN]`.
    pub token: String,
    /// Modifier class added after `evidence-badge`.
    pub class: String,
    /// Visible label. Falls back to the token when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Badge {
    /// Creates a badge whose label is the token itself.
    pub fn new(token: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            class: class.into(),
            label: None,
        }
    }

    /// The literal text matched in the document, brackets included.
    pub fn pattern(&self) -> String {
        format!("[{}]", self.token)
    }

    /// The HTML emitted in place of [`Badge::pattern`].
    pub fn to_html(&self) -> String {
        let label = self.label.as_deref().unwrap_or(&self.token);
        format!(
            "<span class=\"evidence-badge {}\">{}</span>",
            self.class, label
        )
    }
}

/// Options for a single conversion run.
///
/// Defaults reproduce the fixed behaviour: three evidence badges, ids on
/// `h2`-`h4`, table of contents built from `h2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Badge substitutions, applied in order after links.
    #[serde(default = "default_badges")]
    pub badges: Vec<Badge>,
    /// Heading levels that receive a slug `id` attribute.
    #[serde(default = "default_anchor_levels")]
    pub anchor_levels: Vec<u8>,
    /// Heading level collected into the table of contents.
    #[serde(default = "default_toc_level")]
    pub toc_level: u8,
}

fn default_badges() -> Vec<Badge> {
    vec![
        Badge::new("PROVEN", "evidence-proven"),
        Badge::new("SUPPORTED", "evidence-supported"),
        Badge::new("LOGICAL EXTENSION", "evidence-extension"),
    ]
}

fn default_anchor_levels() -> Vec<u8> {
    vec![2, 3, 4]
}

fn default_toc_level() -> u8 {
    2
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            badges: default_badges(),
            anchor_levels: default_anchor_levels(),
            toc_level: default_toc_level(),
        }
    }
}

impl ConvertOptions {
    /// Parses options from a YAML mapping. Missing fields take their defaults.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConvertError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let options: Self = serde_yaml::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects heading levels that don't name an HTML heading element.
    pub fn validate(&self) -> Result<(), ConvertError> {
        for level in &self.anchor_levels {
            check_level(*level)?;
        }
        check_level(self.toc_level)?;
        Ok(())
    }
}
