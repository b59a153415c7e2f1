//! Comment density.

use std::sync::LazyLock;

use regex::Regex;

use crate::finding::{Category, Finding};
use crate::lines::body;

use super::Check;

/// A `#` followed by whitespace and at least one more character on the line.
/// Matched against the line body, so `\r` never stands in for text.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*#\s.+").expect("valid regex"));

/// Counts lines carrying a written comment.
#[derive(Debug, Clone, Copy)]
pub struct CommentCheck;

impl Check for CommentCheck {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn category(&self) -> Category {
        Category::Comments
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let count = lines.iter().filter(|line| COMMENT_RE.is_match(body(line))).count();

        let finding = if count > 0 {
            Finding::info(
                Category::Comments,
                format!("{count} comments detected in program"),
            )
        } else {
            Finding::error(Category::Comments, "No comments detected in program")
        };
        vec![finding]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    #[test]
    fn full_line_and_trailing_comments() {
        let lines = ["# compute totals\n", "total = 0  # running sum\n", "x = 1\n"];
        let findings = CommentCheck.run(&lines);
        assert_eq!(findings[0].severity(), Severity::Info);
        assert_eq!(
            findings[0].to_string(),
            "COMMENTS: 2 comments detected in program"
        );
    }

    #[test]
    fn marker_without_text_is_not_a_comment() {
        let lines = ["#\n", "#!/usr/bin/env python\n", "x = 1 #\n"];
        let findings = CommentCheck.run(&lines);
        assert_eq!(findings[0].severity(), Severity::Error);
        assert_eq!(
            findings[0].to_string(),
            "COMMENTS: No comments detected in program"
        );
    }

    #[test]
    fn carriage_return_is_not_comment_text() {
        assert_eq!(CommentCheck.run(&["# \r\n"])[0].severity(), Severity::Error);
        assert_eq!(CommentCheck.run(&["# note\r\n"])[0].severity(), Severity::Info);
    }

    #[test]
    fn empty_file() {
        assert_eq!(CommentCheck.run(&[])[0].severity(), Severity::Error);
    }
}
