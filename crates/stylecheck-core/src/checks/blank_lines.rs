//! Blank-line usage: separating steps inside a block, and separating
//! definitions from each other.
//!
//! Both checks look at a line's neighbours. A neighbour outside the file
//! never satisfies the pattern, so the first and last lines cannot match.

use crate::finding::{Category, Finding};
use crate::lines::is_blank;

use super::Check;

const DEFINITION_KEYWORD: &str = "def";

/// Blank lines with non-blank lines directly above and below.
#[derive(Debug, Clone, Copy)]
pub struct BlankInBlockCheck;

/// Count blank lines sitting between two non-blank lines.
pub fn count_blank_in_block(lines: &[&str]) -> usize {
    lines
        .windows(3)
        .filter(|w| !is_blank(w[0]) && is_blank(w[1]) && !is_blank(w[2]))
        .count()
}

impl Check for BlankInBlockCheck {
    fn name(&self) -> &'static str {
        "blank-lines-in-blocks"
    }

    fn category(&self) -> Category {
        Category::Whitespace
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let count = count_blank_in_block(lines);
        let finding = if count == 0 {
            Finding::error(Category::Whitespace, "No newlines found within functions")
        } else {
            Finding::info(
                Category::Whitespace,
                format!("Newlines possibly found inside {count} function(s)."),
            )
        };
        vec![finding]
    }
}

/// Two blank lines followed by a definition line.
#[derive(Debug, Clone, Copy)]
pub struct BlankBetweenDefsCheck;

/// Count pairs of blank lines directly followed by a definition.
pub fn count_blank_between_defs(lines: &[&str]) -> usize {
    lines
        .windows(3)
        .filter(|w| is_blank(w[0]) && is_blank(w[1]) && w[2].contains(DEFINITION_KEYWORD))
        .count()
}

impl Check for BlankBetweenDefsCheck {
    fn name(&self) -> &'static str {
        "blank-lines-between-definitions"
    }

    fn category(&self) -> Category {
        Category::Whitespace
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let count = count_blank_between_defs(lines);
        let finding = if count == 0 {
            Finding::error(Category::Whitespace, "No newlines found between functions")
        } else {
            Finding::info(
                Category::Whitespace,
                format!("Newlines possibly found between {count} function(s)"),
            )
        };
        vec![finding]
    }
}
