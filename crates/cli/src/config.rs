//! YAML config file merged with command-line arguments.

use std::path::{Path, PathBuf};

use mdfrag_core::{ConvertError, ConvertOptions};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while assembling a run from flags and config.
#[derive(Debug, Error)]
pub enum CliError {
    /// Conversion, I/O or config parsing failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// Neither the command line nor the config file named a required path.
    #[error("no {0} file given: pass it as an argument or set `{0}` in the config file")]
    MissingPath(&'static str),
}

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub toc_json: Option<PathBuf>,
    #[serde(flatten)]
    pub options: ConvertOptions,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConvertError::io(path, err))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)?;
        config.options.validate()?;
        Ok(config)
    }
}

/// Everything needed for one conversion.
#[derive(Debug)]
pub struct RunPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub toc_json: Option<PathBuf>,
    pub options: ConvertOptions,
}

impl RunPlan {
    /// Command-line values win over the config file.
    pub fn resolve(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        toc_json: Option<PathBuf>,
        config: FileConfig,
    ) -> Result<Self, CliError> {
        Ok(Self {
            input: input.or(config.input).ok_or(CliError::MissingPath("input"))?,
            output: output.or(config.output).ok_or(CliError::MissingPath("output"))?,
            toc_json: toc_json.or(config.toc_json),
            options: config.options,
        })
    }
}
