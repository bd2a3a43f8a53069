//! Optional configuration file.
//!
//! Handles loading and validating `cubemap-faces.toml`. The file supplies
//! defaults for the command-line flags; any flag given on the command line
//! wins over the file.
//!
//! ## Config File Location
//!
//! `cubemap-faces.toml` in the working directory is picked up automatically.
//! A different file can be named with `--config <path>`; a named file must
//! exist.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! prefix = ""        # Prepended to every output filename
//! # format = "png"   # Output format (default: same as the input)
//! force = false      # Overwrite existing face files
//! quality = 75       # JPEG/AVIF quality (1-100)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "cubemap-faces.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config file {} does not exist", .0.display())]
    NotFound(PathBuf),
}

/// Defaults for an extraction run, loaded from `cubemap-faces.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Output filename prefix.
    pub prefix: String,
    /// Output format name. `None` keeps the input's format.
    pub format: Option<String>,
    /// Overwrite existing outputs.
    pub force: bool,
    /// Lossy encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            format: None,
            force: false,
            quality: 75,
        }
    }
}

impl ExtractConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::Validation("quality must be 1-100".into()));
        }
        if self.format.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(ConfigError::Validation("format must not be empty".into()));
        }
        Ok(())
    }
}

/// Parse and validate config file contents.
pub fn parse_config(content: &str) -> Result<ExtractConfig, ConfigError> {
    let config: ExtractConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the config for a run.
///
/// - `explicit` set → that file, which must exist.
/// - otherwise → `cubemap-faces.toml` in `dir` if present, else defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ExtractConfig, ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let path = dir.join(CONFIG_FILENAME);
            if !path.exists() {
                return Ok(ExtractConfig::default());
            }
            path
        }
    };
    let content = fs::read_to_string(&path)?;
    parse_config(&content)
}
