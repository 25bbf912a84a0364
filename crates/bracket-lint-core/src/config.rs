//! Configuration types for bracket-lint.

use crate::classifier::{BracketPairs, ClassifierError};
use crate::validator::PositionMode;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for bracket-lint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bracket alphabet.
    #[serde(default)]
    pub brackets: BracketsConfig,

    /// Reporting options.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// The bracket alphabet is checked here so a bad pair set fails at load
    /// time rather than on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the pairs are rejected.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.classifier()?;
        Ok(config)
    }

    /// Builds the bracket classifier described by `[brackets]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured pairs are malformed or conflict.
    pub fn classifier(&self) -> Result<BracketPairs, ConfigError> {
        match &self.brackets.pairs {
            Some(specs) => Ok(BracketPairs::from_specs(specs.as_slice())?),
            None => Ok(BracketPairs::default()),
        }
    }
}

/// `[brackets]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketsConfig {
    /// Two-character pair specs such as `"()"`. Defaults to `()`, `{}`, `[]`.
    #[serde(default)]
    pub pairs: Option<Vec<String>>,
}

/// `[report]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How line and column numbers are computed.
    #[serde(default)]
    pub positions: PositionMode,

    /// Exit non-zero when any violation is found.
    #[serde(default)]
    pub fail_on_violation: bool,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// The configured bracket pairs are invalid.
    #[error("Invalid [brackets] config: {0}")]
    Brackets(#[from] ClassifierError),
}
