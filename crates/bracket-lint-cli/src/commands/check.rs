//! Check command implementation.

use anyhow::{Context, Result};
use bracket_lint_core::{read_source, Analyzer, Config, PositionMode};
use std::io::IsTerminal;
use std::path::Path;

use crate::OutputFormat;

/// Options for a single check run.
pub struct CheckOptions<'a> {
    /// File to validate; also the label on every report.
    pub path: &'a Path,
    /// Output format.
    pub format: OutputFormat,
    /// Position mode override.
    pub positions: Option<PositionMode>,
    /// Exit with status 1 when violations are found.
    pub deny: bool,
    /// Config file given with `--config`. Without one the built-in defaults
    /// apply and nothing else is consulted.
    pub config: Option<&'a Path>,
}

/// Runs the check command.
pub fn run(opts: &CheckOptions<'_>) -> Result<()> {
    let config = load_config(opts.config)?;
    let fail_on_violation = opts.deny || config.report.fail_on_violation;

    let mut builder = Analyzer::builder().config(config);
    if let Some(mode) = opts.positions {
        builder = builder.positions(mode);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    let content = match read_source(opts.path) {
        Ok(content) => content,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Checking {} ({:?} positions)",
        opts.path.display(),
        analyzer.positions()
    );

    let result = analyzer.analyze_source(opts.path, &content);

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    super::output::print(&mut stdout.lock(), &result, &content, opts.format, color)?;

    if fail_on_violation && result.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config given, using defaults");
        return Ok(Config::default());
    };
    tracing::debug!("Using config: {}", path.display());
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
