//! Indentation consistency.

use crate::finding::{Category, Finding};
use crate::lines::{indent_width, is_blank};

use super::Check;

/// Indentation must be a multiple of this many characters.
pub const INDENT_UNIT: usize = 4;

/// Counts lines whose indentation is not a multiple of [`INDENT_UNIT`].
///
/// Blank lines are skipped. A line holding only spaces is not blank, so its
/// width is measured like any other.
#[derive(Debug, Clone, Copy)]
pub struct IndentationCheck;

impl Check for IndentationCheck {
    fn name(&self) -> &'static str {
        "indentation"
    }

    fn category(&self) -> Category {
        Category::Indentation
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let incorrect = lines
            .iter()
            .filter(|line| !is_blank(line))
            .map(|line| indent_width(line))
            .filter(|width| *width != 0 && width % INDENT_UNIT != 0)
            .count();

        let finding = if incorrect > 0 {
            Finding::error(
                Category::Indentation,
                format!("Inconsistent indentation found {incorrect} times throughout file"),
            )
        } else {
            Finding::info(
                Category::Indentation,
                "Consistent indentation throughout file",
            )
        };
        vec![finding]
    }
}
