//! bracket-lint CLI tool.
//!
//! Usage:
//! ```bash
//! bracket-lint [OPTIONS] <FILE>
//! ```

use anyhow::Result;
use bracket_lint_core::PositionMode;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Printed on stdout when the arguments cannot be parsed.
const USAGE: &str = "Usage: bracket-lint <file_path>";

/// Report mismatched and unclosed brackets in a file
#[derive(Parser)]
#[command(name = "bracket-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to check
    file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// How line and column numbers are computed (overrides config)
    #[arg(long)]
    positions: Option<Positions>,

    /// Exit with status 1 when any violation is found
    #[arg(long)]
    deny: bool,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One message per violation, nothing when clean.
    #[default]
    Text,
    /// One-line-per-violation with the violation kind.
    Compact,
    /// JSON output.
    Json,
    /// Source excerpts with the offending bracket underlined.
    Pretty,
}

/// Position mode selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Positions {
    /// Line and column both equal the character index plus one
    ScanIndex,
    /// Real line and column numbers
    LineColumn,
}

impl From<Positions> for PositionMode {
    fn from(p: Positions) -> Self {
        match p {
            Positions::ScanIndex => Self::ScanIndex,
            Positions::LineColumn => Self::LineColumn,
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{USAGE}");
            eprint!("{e}");
            std::process::exit(2);
        }
    };

    // Stdout carries the report; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::check::run(&commands::check::CheckOptions {
        path: &cli.file,
        format: cli.format,
        positions: cli.positions.map(PositionMode::from),
        deny: cli.deny,
        config: cli.config.as_deref(),
    })
}
