//! Import placement.

use crate::finding::{Category, Finding};
use crate::lines;

use super::Check;

/// Imports on a 1-based line number above this are "not near the top".
pub const IMPORT_TOP_LINES: usize = 15;

const IMPORT_KEYWORD: &str = "import";

/// Flags indented imports and imports far from the top of the file.
#[derive(Debug, Clone, Copy)]
pub struct ImportCheck;

impl Check for ImportCheck {
    fn name(&self) -> &'static str {
        "imports"
    }

    fn category(&self) -> Category {
        Category::Import
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            if !line.contains(IMPORT_KEYWORD) {
                continue;
            }
            let line_no = idx + 1;

            if lines::indent_width(line) > 0 {
                findings.push(Finding::error(
                    Category::Import,
                    format!("Import statement possibly inside function on line {line_no}"),
                ));
            } else {
                findings.push(Finding::info(
                    Category::Import,
                    format!("Import statement found on line {line_no}"),
                ));
            }

            if line_no > IMPORT_TOP_LINES {
                findings.push(Finding::error(
                    Category::Import,
                    format!("WARNING: Import statement found on line {line_no}, not top of file."),
                ));
            }
        }

        findings
    }
}
