//! Core library for stylecheck.
//!
//! Heuristic style checks for introductory-course source files. A run takes
//! the file's lines, passes them through every registered check in a fixed
//! order, and returns a [`Report`] with style errors and informational stats
//! kept apart. Nothing here prints; rendering belongs to the caller.
//!
//! # Modules
//!
//! - [`lines`] - Line splitting and measurement helpers
//! - [`finding`] - Findings and the two-bucket report
//! - [`checks`] - The check registry and each heuristic
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use stylecheck_core::{lines, run_checks};
//!
//! let source = "# Author: A. Student\nimport os\n\nresult = 1 + 2\n";
//! let report = run_checks(&lines::split_lines(source));
//!
//! for finding in &report.errors {
//!     println!("{finding}");
//! }
//! ```
#![deny(unsafe_code)]

pub mod checks;
pub mod config;
pub mod error;
pub mod finding;
pub mod lines;

pub use checks::{ALL_CHECKS, Check, run_checks};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use finding::{Category, Finding, Report, Severity};
