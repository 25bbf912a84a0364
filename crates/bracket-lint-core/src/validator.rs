//! Single-pass bracket nesting validation.

use crate::classifier::BracketClassifier;
use crate::types::{Location, Violation, ViolationKind};

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// How reported line and column numbers are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionMode {
    /// Line and column are both the character index plus one. End of text
    /// is reported at `(char_count + 1, 1)`. Matches the output of the
    /// original `invalid_brackets` tool.
    #[default]
    ScanIndex,
    /// Newline-aware 1-based line and column. End of text is reported at the
    /// position just past the last character.
    LineColumn,
}

/// Tracks the reported position of the character being scanned.
struct Cursor {
    mode: PositionMode,
    index: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    fn new(mode: PositionMode) -> Self {
        Self {
            mode,
            index: 0,
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> (usize, usize) {
        match self.mode {
            PositionMode::ScanIndex => (self.index + 1, self.index + 1),
            PositionMode::LineColumn => (self.line, self.column),
        }
    }

    fn end_position(&self) -> (usize, usize) {
        match self.mode {
            PositionMode::ScanIndex => (self.index + 1, 1),
            PositionMode::LineColumn => (self.line, self.column),
        }
    }

    fn advance(&mut self, c: char) {
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

/// Scans text for mismatched and unclosed brackets.
///
/// A validator holds no scan state of its own; every call to
/// [`Validator::validate`] starts from an empty stack, so one validator can
/// be reused across inputs and results never depend on earlier runs.
#[derive(Clone, Copy)]
pub struct Validator<'c> {
    classifier: &'c dyn BracketClassifier,
    positions: PositionMode,
}

impl<'c> Validator<'c> {
    /// Creates a validator using `classifier` and [`PositionMode::ScanIndex`].
    #[must_use]
    pub fn new(classifier: &'c dyn BracketClassifier) -> Self {
        Self {
            classifier,
            positions: PositionMode::default(),
        }
    }

    /// Sets how positions are reported.
    #[must_use]
    pub fn positions(mut self, mode: PositionMode) -> Self {
        self.positions = mode;
        self
    }

    /// Validates `text`, labelling every report with `label`.
    ///
    /// Mismatched closers are reported in scan order as they are met; they
    /// never touch the stack. Openers left on the stack are reported after
    /// the scan, outermost first, at a synthetic end-of-text position; their
    /// byte span still points at the opener.
    #[must_use]
    pub fn validate(&self, text: &str, label: impl AsRef<Path>) -> Vec<Violation> {
        let label = label.as_ref();
        debug!(
            "Validating {} ({} bytes, {:?})",
            label.display(),
            text.len(),
            self.positions
        );

        // Only openers are ever pushed, each with its byte offset.
        let mut stack: Vec<(char, usize)> = Vec::new();
        let mut violations = Vec::new();
        let mut cursor = Cursor::new(self.positions);

        for (offset, c) in text.char_indices() {
            if self.classifier.is_opener(c) {
                stack.push((c, offset));
            } else if self.classifier.is_closer(c) {
                match stack.last() {
                    Some(&(open, _)) if self.classifier.is_matching_pair(open, c) => {
                        stack.pop();
                    }
                    top => {
                        let (line, column) = cursor.position();
                        let top = top.map(|&(open, _)| open);
                        trace!("'{c}' at {line}:{column} does not close {top:?}");
                        let location = Location::new(label.to_path_buf(), line, column)
                            .with_span(offset, c.len_utf8());
                        violations.push(Violation::new(ViolationKind::Mismatched, c, location));
                    }
                }
            }
            cursor.advance(c);
        }

        let (line, column) = cursor.end_position();
        for (open, offset) in stack {
            let location = Location::new(label.to_path_buf(), line, column)
                .with_span(offset, open.len_utf8());
            violations.push(Violation::new(ViolationKind::Unclosed, open, location));
        }

        debug!(
            "Validated {}: {} violation(s)",
            label.display(),
            violations.len()
        );
        violations
    }
}

/// Validates `text` with `classifier`, reporting scan-index positions.
///
/// # Example
///
/// ```
/// use bracket_lint_core::{validate, BracketPairs};
///
/// let reports = validate("(]", &BracketPairs::default(), "input.txt");
/// assert_eq!(reports.len(), 2);
/// assert_eq!(reports[0].message, "Invalid bracket ] found at input.txt:2:2");
/// assert_eq!(reports[1].message, "Invalid bracket ( found at input.txt:3:1");
/// ```
#[must_use]
pub fn validate(
    text: &str,
    classifier: &dyn BracketClassifier,
    label: impl AsRef<Path>,
) -> Vec<Violation> {
    Validator::new(classifier).validate(text, label)
}
