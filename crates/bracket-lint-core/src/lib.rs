//! # bracket-lint-core
//!
//! Single-pass bracket nesting validation.
//!
//! This crate scans text and reports mismatched or unclosed brackets. It
//! tracks nesting only: brackets inside strings or comments count like any
//! other. It includes:
//!
//! - [`BracketClassifier`] trait for the bracket alphabet, with the
//!   [`BracketPairs`] registry as the default implementation
//! - [`Validator`] / [`validate`] for the scan itself
//! - [`Analyzer`] for validating files, alone or in batches
//! - [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```
//! use bracket_lint_core::{validate, BracketPairs};
//!
//! let violations = validate("([)]", &BracketPairs::default(), "demo.txt");
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].message, "Invalid bracket ) found at demo.txt:3:3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod classifier;
mod config;
mod types;
mod validator;

pub use analyzer::{read_source, Analyzer, AnalyzerBuilder, AnalyzerError};
pub use classifier::{BracketClassifier, BracketPairs, ClassifierError};
pub use config::{BracketsConfig, Config, ConfigError, ReportConfig};
pub use types::{LintResult, Location, Violation, ViolationDiagnostic, ViolationKind};
pub use validator::{validate, PositionMode, Validator};
