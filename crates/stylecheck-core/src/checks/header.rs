//! Header comment detection.

use crate::finding::{Category, Finding};

use super::Check;

/// Character that marks a line as part of the header.
const COMMENT_MARKER: char = '#';

/// Reports the length of the leading comment block, or its absence.
#[derive(Debug, Clone, Copy)]
pub struct HeaderCheck;

/// Index of the first line without a comment marker.
///
/// If every line has a marker (or there are no lines) the boundary is the
/// end of the file.
pub fn header_boundary(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|line| !line.contains(COMMENT_MARKER))
        .unwrap_or(lines.len())
}

impl Check for HeaderCheck {
    fn name(&self) -> &'static str {
        "header"
    }

    fn category(&self) -> Category {
        Category::Header
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let boundary = header_boundary(lines);
        let finding = if boundary == 0 && !lines.is_empty() {
            Finding::error(Category::Header, "No header detected")
        } else {
            Finding::info(
                Category::Header,
                format!("Header length: {boundary} lines"),
            )
        };
        vec![finding]
    }
}
