//! Analyzer for validating files and in-memory sources.

use crate::classifier::{BracketClassifier, BracketPairs};
use crate::config::{Config, ConfigError};
use crate::types::LintResult;
use crate::validator::{PositionMode, Validator};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The input could not be read. Nothing was validated.
    #[error("Error reading file: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Reads a whole file as text.
///
/// Invalid UTF-8 sequences become U+FFFD, so any readable file can be
/// validated.
///
/// # Errors
///
/// Returns [`AnalyzerError::Io`] if the file is missing or unreadable.
pub fn read_source(path: &Path) -> Result<String, AnalyzerError> {
    let bytes = std::fs::read(path).map_err(|e| AnalyzerError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    classifier: Option<Arc<dyn BracketClassifier>>,
    positions: Option<PositionMode>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `classifier` instead of the one described by the configuration.
    #[must_use]
    pub fn classifier<C: BracketClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    /// Uses an already shared classifier.
    #[must_use]
    pub fn classifier_arc(mut self, classifier: Arc<dyn BracketClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Overrides the configured position mode.
    #[must_use]
    pub fn positions(mut self, mode: PositionMode) -> Self {
        self.positions = Some(mode);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// Explicit builder settings win over the configuration; the
    /// configuration wins over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured bracket pairs are invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let classifier = match self.classifier {
            Some(classifier) => classifier,
            None => Arc::new(config.classifier()?) as Arc<dyn BracketClassifier>,
        };
        let positions = self.positions.unwrap_or(config.report.positions);

        Ok(Analyzer {
            classifier,
            positions,
        })
    }
}

/// Validates sources with one shared, read-only classifier.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    classifier: Arc<dyn BracketClassifier>,
    positions: PositionMode,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            classifier: Arc::new(BracketPairs::default()),
            positions: PositionMode::default(),
        }
    }
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the classifier in use.
    #[must_use]
    pub fn classifier(&self) -> &dyn BracketClassifier {
        self.classifier.as_ref()
    }

    /// Returns the position mode in use.
    #[must_use]
    pub fn positions(&self) -> PositionMode {
        self.positions
    }

    /// Returns a validator bound to this analyzer's settings.
    #[must_use]
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(self.classifier.as_ref()).positions(self.positions)
    }

    /// Validates text already in memory.
    #[must_use]
    pub fn analyze_source(&self, label: impl AsRef<Path>, text: &str) -> LintResult {
        LintResult {
            violations: self.validator().validate(text, label),
            files_checked: 1,
        }
    }

    /// Reads and validates a single file, labelling reports with `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Io`] if the file cannot be read.
    pub fn analyze_file(&self, path: &Path) -> Result<LintResult, AnalyzerError> {
        debug!("Analyzing: {}", path.display());
        let content = read_source(path)?;
        Ok(self.analyze_source(path, &content))
    }

    /// Validates several files, one scan per file.
    ///
    /// Files are scanned on the rayon pool. Reports are merged in input order.
    ///
    /// # Errors
    ///
    /// Returns a read error if any file cannot be read; no partial result
    /// is returned.
    pub fn analyze_files<P: AsRef<Path> + Sync>(
        &self,
        paths: &[P],
    ) -> Result<LintResult, AnalyzerError> {
        info!("Analyzing {} file(s)", paths.len());

        let results = paths
            .par_iter()
            .map(|path| self.analyze_file(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut result = LintResult::new();
        for file_result in results {
            result.extend(file_result);
        }

        info!(
            "Analysis complete: {} violation(s) in {} file(s)",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }
}
