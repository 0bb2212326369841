use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while converting a document.
///
/// Malformed markdown is never an error: anything the passes don't recognise
/// is carried through as text. Only I/O, configuration and serialisation
/// problems surface here.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the input or writing an output file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that was being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A heading level outside `1..=6` was requested.
    #[error("Invalid heading level {0}: expected 1 through 6")]
    InvalidLevel(u8),
    /// A heading pattern built from the options failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
    /// The YAML options document could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
    /// The table of contents could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Validates that `level` names an HTML heading element.
pub(crate) fn check_level(level: u8) -> Result<u8, ConvertError> {
    if (1..=6).contains(&level) {
        Ok(level)
    } else {
        Err(ConvertError::InvalidLevel(level))
    }
}
