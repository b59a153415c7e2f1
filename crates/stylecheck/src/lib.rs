//! Library interface for the `stylecheck` CLI.
//!
//! This crate exposes the CLI's argument parser and the pieces `main.rs`
//! wires together, primarily for documentation generation and testing.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`check`] - Reading the target file and running the checks
//! - [`presenter`] - Text rendering of a report
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod check;
pub mod presenter;

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Whether report output should be colorized.
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                  Log filter (e.g., debug, stylecheck=trace)
    STYLECHECK_LOG_PATH       Explicit log file path
    STYLECHECK_LOG_DIR        Log directory
    STYLECHECK_LOG_LEVEL      Default log level (debug, info, warn, error)
    STYLECHECK_MAX_INPUT_BYTES  Largest file accepted, in bytes
    NO_COLOR                  Disable colored output
";

/// Command-line interface definition for stylecheck.
#[derive(Parser)]
#[command(name = "stylecheck")]
#[command(about = "Heuristic style checker for introductory-course source files", long_about = None)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// File to check (exactly one)
    #[arg(value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// List the checks in the order they run
    #[arg(long)]
    pub list_checks: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, value_name = "DIR")]
    pub chdir: Option<Utf8PathBuf>,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// More log detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,
}

/// The usage line printed when the wrong number of files is given.
pub fn usage(program: &str) -> String {
    format!("usage: {program} <file>")
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
