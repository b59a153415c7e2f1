//! Line length.

use crate::finding::{Category, Finding};
use crate::lines::char_len;

use super::Check;

/// Longest allowed line, measured with its terminator.
pub const MAX_LINE_LENGTH: usize = 79;

/// Counts lines longer than [`MAX_LINE_LENGTH`].
///
/// The terminator is part of the measured length, so a line of 79 visible
/// characters followed by `\n` is already over the limit.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthCheck;

impl Check for LineLengthCheck {
    fn name(&self) -> &'static str {
        "line-length"
    }

    fn category(&self) -> Category {
        Category::LineLength
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let count = lines
            .iter()
            .filter(|line| char_len(line) > MAX_LINE_LENGTH)
            .count();

        let finding = if count > 0 {
            Finding::error(
                Category::LineLength,
                format!("{count} line(s) over {MAX_LINE_LENGTH} chars in length"),
            )
        } else {
            Finding::info(
                Category::LineLength,
                format!("No lines over {MAX_LINE_LENGTH} chars in length"),
            )
        };
        vec![finding]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    #[test]
    fn counts_every_long_line() {
        let long = format!("{}\n", "x".repeat(99));
        let lines: Vec<&str> = std::iter::repeat_n(long.as_str(), 85).collect();
        let findings = LineLengthCheck.run(&lines);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity(), Severity::Error);
        assert_eq!(
            findings[0].to_string(),
            "LINE LENGTH: 85 line(s) over 79 chars in length"
        );
    }

    #[test]
    fn terminator_counts_toward_length() {
        let exactly = format!("{}\n", "y".repeat(78));
        let over = format!("{}\n", "y".repeat(79));
        assert_eq!(LineLengthCheck.run(&[exactly.as_str()])[0].severity(), Severity::Info);
        assert_eq!(LineLengthCheck.run(&[over.as_str()])[0].severity(), Severity::Error);
    }

    #[test]
    fn short_file() {
        let findings = LineLengthCheck.run(&["print(1)\n"]);
        assert_eq!(
            findings[0].to_string(),
            "LINE LENGTH: No lines over 79 chars in length"
        );
    }
}
