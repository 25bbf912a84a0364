//! Output formatting for lint results.

use anyhow::Result;
use bracket_lint_core::{LintResult, ViolationDiagnostic};
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use std::io::Write;

use crate::OutputFormat;

/// Writes lint results in the specified format.
///
/// `source` is the validated text; only the pretty format reads it.
/// `color` selects ANSI styling for the pretty format and should reflect
/// whether `out` is a terminal.
pub fn print(
    out: &mut impl Write,
    result: &LintResult,
    source: &str,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(out, result),
        OutputFormat::Compact => print_compact(out, result),
        OutputFormat::Json => print_json(out, result),
        OutputFormat::Pretty => {
            let theme = if color {
                GraphicalTheme::unicode()
            } else {
                GraphicalTheme::unicode_nocolor()
            };
            print_pretty(out, result, source, theme)
        }
    }
}

fn print_text(out: &mut impl Write, result: &LintResult) -> Result<()> {
    for violation in &result.violations {
        writeln!(out, "{violation}")?;
    }
    Ok(())
}

fn print_compact(out: &mut impl Write, result: &LintResult) -> Result<()> {
    for violation in &result.violations {
        writeln!(
            out,
            "{}: {} {}",
            violation.location, violation.kind, violation.character
        )?;
    }
    Ok(())
}

fn print_json(out: &mut impl Write, result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn print_pretty(
    out: &mut impl Write,
    result: &LintResult,
    source: &str,
    theme: GraphicalTheme,
) -> Result<()> {
    let handler = GraphicalReportHandler::new_themed(theme);

    for violation in &result.violations {
        let name = violation.location.file.display().to_string();
        let report = Report::new(ViolationDiagnostic::from(violation))
            .with_source_code(NamedSource::new(name, source.to_string()));

        let mut rendered = String::new();
        handler.render_report(&mut rendered, &*report)?;
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}
