//! Registered checks that do not report anything yet.
//!
//! They keep their slot in the run order so that filling one in does not
//! reshuffle the report.

use crate::finding::{Category, Finding};

use super::Check;

/// Docstring presence.
#[derive(Debug, Clone, Copy)]
pub struct DocstringCheck;

impl Check for DocstringCheck {
    fn name(&self) -> &'static str {
        "docstrings"
    }

    fn category(&self) -> Category {
        Category::Docstrings
    }

    fn run(&self, _lines: &[&str]) -> Vec<Finding> {
        Vec::new()
    }
}

/// Descriptive variable names.
#[derive(Debug, Clone, Copy)]
pub struct VariableNameCheck;

impl Check for VariableNameCheck {
    fn name(&self) -> &'static str {
        "variable-names"
    }

    fn category(&self) -> Category {
        Category::Naming
    }

    fn run(&self, _lines: &[&str]) -> Vec<Finding> {
        Vec::new()
    }
}

/// Global variable usage.
#[derive(Debug, Clone, Copy)]
pub struct GlobalVariableCheck;

impl Check for GlobalVariableCheck {
    fn name(&self) -> &'static str {
        "global-variables"
    }

    fn category(&self) -> Category {
        Category::Globals
    }

    fn run(&self, _lines: &[&str]) -> Vec<Finding> {
        Vec::new()
    }
}
