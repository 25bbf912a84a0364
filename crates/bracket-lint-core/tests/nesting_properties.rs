//! Integration test: observable properties of the nesting validator.
//!
//! Each test drives the public API only, with the default `()`, `{}`, `[]`
//! alphabet unless stated otherwise.

use bracket_lint_core::{
    validate, Analyzer, BracketClassifier, BracketPairs, PositionMode, Validator, Violation,
    ViolationKind,
};

const LABEL: &str = "input.txt";

fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.message.clone()).collect()
}

// ── Balanced input ──

#[test]
fn balanced_input_yields_nothing() {
    let pairs = BracketPairs::default();
    for text in ["([{}])", "()[]{}", "{[()()]}[]", "a(b[c]{d}e)f"] {
        assert!(
            validate(text, &pairs, LABEL).is_empty(),
            "{text:?} should be balanced"
        );
    }
}

#[test]
fn text_without_brackets_yields_nothing() {
    let pairs = BracketPairs::default();
    let text = "plain words, <angles> and \"quotes\"\n".repeat(500);
    assert!(validate(&text, &pairs, LABEL).is_empty());
}

// ── Mismatches and unclosed openers ──

#[test]
fn mismatch_reported_at_scan_position() {
    let pairs = BracketPairs::default();
    let v = validate("(]", &pairs, LABEL);

    assert_eq!(v[0].kind, ViolationKind::Mismatched);
    assert_eq!(v[0].character, ']');
    assert_eq!((v[0].location.line, v[0].location.column), (2, 2));
    assert_eq!(v[0].message, "Invalid bracket ] found at input.txt:2:2");

    // The rejected `]` never pops, so `(` is still open at end of text.
    assert_eq!(v.len(), 2);
    assert_eq!(v[1].kind, ViolationKind::Unclosed);
    assert_eq!(v[1].character, '(');
}

#[test]
fn unclosed_openers_point_past_end() {
    let pairs = BracketPairs::default();
    let v = validate("((", &pairs, LABEL);
    assert_eq!(
        messages(&v),
        vec![
            "Invalid bracket ( found at input.txt:3:1",
            "Invalid bracket ( found at input.txt:3:1",
        ]
    );
    assert!(v.iter().all(|v| v.kind == ViolationKind::Unclosed));
}

#[test]
fn unclosed_openers_outermost_first() {
    let pairs = BracketPairs::default();
    let v = validate("{(", &pairs, LABEL);
    let chars: Vec<char> = v.iter().map(|v| v.character).collect();
    assert_eq!(chars, vec!['{', '(']);
}

#[test]
fn interleaving_rejects_only_the_crossing_closer() {
    let pairs = BracketPairs::default();
    let v = validate("([)]", &pairs, LABEL);
    assert_eq!(
        messages(&v),
        vec!["Invalid bracket ) found at input.txt:3:3"]
    );
}

#[test]
fn mismatches_precede_unclosed() {
    let pairs = BracketPairs::default();
    let v = validate("(](", &pairs, LABEL);
    let kinds: Vec<ViolationKind> = v.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::Mismatched,
            ViolationKind::Unclosed,
            ViolationKind::Unclosed,
        ]
    );
    assert_eq!(
        messages(&v),
        vec![
            "Invalid bracket ] found at input.txt:2:2",
            "Invalid bracket ( found at input.txt:4:1",
            "Invalid bracket ( found at input.txt:4:1",
        ]
    );
}

#[test]
fn every_closer_kind_is_checked() {
    let pairs = BracketPairs::default();
    let v = validate(")]}", &pairs, LABEL);
    assert_eq!(
        messages(&v),
        vec![
            "Invalid bracket ) found at input.txt:1:1",
            "Invalid bracket ] found at input.txt:2:2",
            "Invalid bracket } found at input.txt:3:3",
        ]
    );
}

// ── Determinism ──

#[test]
fn repeated_runs_are_identical() {
    let pairs = BracketPairs::default();
    let text = "fn main() { let v = [1, 2); }\n{";
    assert_eq!(validate(text, &pairs, LABEL), validate(text, &pairs, LABEL));
}

// ── Substitutable alphabets ──

/// Treats `<` / `>` as the only pair, without using `BracketPairs`.
struct AngleOnly;

impl BracketClassifier for AngleOnly {
    fn is_opener(&self, c: char) -> bool {
        c == '<'
    }

    fn closer_for(&self, opener: char) -> Option<char> {
        (opener == '<').then_some('>')
    }

    fn is_closer(&self, c: char) -> bool {
        c == '>'
    }
}

#[test]
fn custom_classifier_drives_the_scan() {
    let v = validate("<(>]>", &AngleOnly, LABEL);
    assert_eq!(messages(&v), vec!["Invalid bracket > found at input.txt:5:5"]);
}

#[test]
fn analyzer_accepts_custom_classifier() {
    let analyzer = Analyzer::builder()
        .classifier(AngleOnly)
        .positions(PositionMode::LineColumn)
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze_source(LABEL, "<\n<>");
    assert_eq!(
        messages(&result.violations),
        vec!["Invalid bracket < found at input.txt:2:3"]
    );
}

// ── Position modes ──

#[test]
fn line_column_mode_reports_real_positions() {
    let pairs = BracketPairs::default();
    let text = "{\n  (a]\n}\n";
    let v = Validator::new(&pairs)
        .positions(PositionMode::LineColumn)
        .validate(text, LABEL);
    assert_eq!(
        messages(&v),
        vec![
            "Invalid bracket ] found at input.txt:2:5",
            "Invalid bracket } found at input.txt:3:1",
            "Invalid bracket { found at input.txt:4:1",
            "Invalid bracket ( found at input.txt:4:1",
        ]
    );
}
