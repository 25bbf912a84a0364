//! Core types for bracket violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What went wrong with a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// A closer that does not match the innermost open scope (or has no
    /// open scope at all).
    Mismatched,
    /// An opener still open at end of text.
    Unclosed,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatched => write!(f, "mismatched"),
            Self::Unclosed => write!(f, "unclosed"),
        }
    }
}

/// Source location of a violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Source label, usually the path the text was read from.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in the text (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A single bracket nesting problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Mismatched closer or unclosed opener.
    pub kind: ViolationKind,
    /// The offending bracket.
    pub character: char,
    /// Where it was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation with the standard message.
    #[must_use]
    pub fn new(kind: ViolationKind, character: char, location: Location) -> Self {
        let message = format!("Invalid bracket {character} found at {location}");
        Self {
            kind,
            character,
            location,
            message,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// A violation as a miette diagnostic, for rich terminal display.
///
/// Attach the scanned text with `miette::Report::with_source_code` to get
/// the offending bracket underlined.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        let (label_message, help) = match v.kind {
            ViolationKind::Mismatched => (
                format!("'{}' does not close the innermost open bracket", v.character),
                None,
            ),
            ViolationKind::Unclosed => (
                "opened here".to_string(),
                Some(format!("'{}' is never closed", v.character)),
            ),
        };
        Self {
            message: v.message.clone(),
            help,
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message,
        }
    }
}

/// Result of validating one or more sources.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in report order.
    pub violations: Vec<Violation>,
    /// Number of sources checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any violation was found.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Returns violations of the given kind.
    #[must_use]
    pub fn by_kind(&self, kind: ViolationKind) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.kind == kind).collect()
    }

    /// Counts violations as `(mismatched, unclosed)`.
    #[must_use]
    pub fn count_by_kind(&self) -> (usize, usize) {
        let mismatched = self
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::Mismatched)
            .count();
        (mismatched, self.violations.len() - mismatched)
    }

    /// Appends violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;

    fn make_violation(kind: ViolationKind) -> Violation {
        Violation::new(
            kind,
            ']',
            Location::new(PathBuf::from("src/main.c"), 2, 2).with_span(1, 1),
        )
    }

    #[test]
    fn violation_message_format() {
        let v = make_violation(ViolationKind::Mismatched);
        assert_eq!(v.message, "Invalid bracket ] found at src/main.c:2:2");
    }

    #[test]
    fn violation_display_is_message() {
        let v = make_violation(ViolationKind::Unclosed);
        assert_eq!(v.to_string(), v.message);
    }

    #[test]
    fn location_display() {
        let loc = Location::new(PathBuf::from("a.txt"), 3, 1);
        assert_eq!(loc.to_string(), "a.txt:3:1");
    }

    #[test]
    fn violation_json_shape() {
        let v = make_violation(ViolationKind::Mismatched);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "mismatched");
        assert_eq!(json["character"], "]");
        assert_eq!(json["location"]["line"], 2);
    }

    #[test]
    fn diagnostic_carries_span() {
        let v = make_violation(ViolationKind::Mismatched);
        let diag = ViolationDiagnostic::from(&v);
        assert_eq!(diag.to_string(), v.message);

        let labels: Vec<_> = diag.labels().expect("span label").collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 1);
        assert_eq!(labels[0].len(), 1);
        assert!(diag.help().is_none());
    }

    #[test]
    fn unclosed_diagnostic_has_help() {
        let mut v = make_violation(ViolationKind::Unclosed);
        v.character = '(';
        let diag = ViolationDiagnostic::from(&v);
        let help = diag.help().expect("help").to_string();
        assert_eq!(help, "'(' is never closed");
    }

    #[test]
    fn count_by_kind_splits() {
        let mut result = LintResult::new();
        result
            .violations
            .push(make_violation(ViolationKind::Mismatched));
        result.violations.push(make_violation(ViolationKind::Unclosed));
        result.violations.push(make_violation(ViolationKind::Unclosed));

        assert!(result.has_violations());
        assert_eq!(result.count_by_kind(), (1, 2));
        assert_eq!(result.by_kind(ViolationKind::Unclosed).len(), 2);
    }

    #[test]
    fn extend_merges_counts() {
        let mut a = LintResult::new();
        a.files_checked = 1;
        a.violations.push(make_violation(ViolationKind::Mismatched));

        let mut b = LintResult::new();
        b.files_checked = 2;
        b.violations.push(make_violation(ViolationKind::Unclosed));

        a.extend(b);
        assert_eq!(a.files_checked, 3);
        assert_eq!(a.violations[1].kind, ViolationKind::Unclosed);
    }
}
