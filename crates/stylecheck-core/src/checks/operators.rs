//! Whitespace around comparison and arithmetic operators.
//!
//! A run of operator characters (`a <= b` has one run, `<=`) is one
//! occurrence. Each occurrence is tested against three predicates
//! independently, so the buckets may overlap: an over-spaced occurrence such
//! as `a  = b` also counts as spaced. This mirrors how the heuristic has
//! always been reported and is intentionally left as is.

use std::sync::LazyLock;

use regex::Regex;

use crate::finding::{Category, Finding};
use crate::lines;

use super::Check;

static OPERATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+/%<=>*!]+").expect("valid regex"));

/// Per-bucket operator counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorTally {
    /// Whitespace on both sides.
    pub spaced: usize,
    /// No whitespace on at least one side.
    pub unspaced: usize,
    /// Whitespace on both sides, two or more characters on at least one.
    pub over_spaced: usize,
}

impl OperatorTally {
    /// Count operator occurrences in a single line.
    ///
    /// A line edge next to an operator counts as zero whitespace on that side.
    /// The terminator, `\n` or `\r\n`, counts as one whitespace character.
    pub fn of_line(line: &str) -> Self {
        let body = lines::body(line);
        let terminated = body.len() < line.len();

        let mut tally = Self::default();
        for m in OPERATOR_RE.find_iter(body) {
            let left = body[..m.start()]
                .chars()
                .rev()
                .take_while(|c| c.is_whitespace())
                .count();
            let tail = &body[m.end()..];
            let trailing = tail.chars().take_while(|c| c.is_whitespace()).count();
            let right = if terminated && tail.trim_start().is_empty() {
                trailing + 1
            } else {
                trailing
            };

            if left == 0 || right == 0 {
                tally.unspaced += 1;
            } else {
                tally.spaced += 1;
                if left >= 2 || right >= 2 {
                    tally.over_spaced += 1;
                }
            }
        }
        tally
    }

    const fn merge(self, other: Self) -> Self {
        Self {
            spaced: self.spaced + other.spaced,
            unspaced: self.unspaced + other.unspaced,
            over_spaced: self.over_spaced + other.over_spaced,
        }
    }
}

/// Totals operator spacing across the whole file.
#[derive(Debug, Clone, Copy)]
pub struct OperatorSpacingCheck;

impl Check for OperatorSpacingCheck {
    fn name(&self) -> &'static str {
        "operator-whitespace"
    }

    fn category(&self) -> Category {
        Category::Whitespace
    }

    fn run(&self, lines: &[&str]) -> Vec<Finding> {
        let total = lines
            .iter()
            .map(|line| OperatorTally::of_line(line))
            .fold(OperatorTally::default(), OperatorTally::merge);

        let mut findings = Vec::new();
        if total.unspaced > 0 {
            findings.push(Finding::error(
                Category::Whitespace,
                format!(
                    "No whitespace found around {} operators in file",
                    total.unspaced
                ),
            ));
        }
        if total.over_spaced > 0 {
            findings.push(Finding::error(
                Category::Whitespace,
                format!(
                    "Excess whitespace found around {} operators in file",
                    total.over_spaced
                ),
            ));
        }
        if total.spaced > 0 {
            findings.push(Finding::info(
                Category::Whitespace,
                format!("Whitespace found around {} operators in file", total.spaced),
            ));
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    #[test]
    fn unspaced_expression() {
        let tally = OperatorTally::of_line("1+2/5+temp\n");
        assert!(tally.unspaced >= 3);
        assert_eq!(tally.spaced, 0);
        assert_eq!(tally.over_spaced, 0);
    }

    #[test]
    fn correctly_spaced_assignment() {
        let tally = OperatorTally::of_line("result = a + b\n");
        assert_eq!(
            tally,
            OperatorTally {
                spaced: 2,
                unspaced: 0,
                over_spaced: 0,
            }
        );
    }

    #[test]
    fn compound_operator_is_one_occurrence() {
        let tally = OperatorTally::of_line("if a <= b:\n");
        assert_eq!(tally.spaced, 1);
        assert_eq!(tally.unspaced, 0);
    }

    #[test]
    fn over_spaced_also_counts_as_spaced() {
        let tally = OperatorTally::of_line("x  = 1\n");
        assert_eq!(tally.over_spaced, 1);
        assert_eq!(tally.spaced, 1);
        assert_eq!(tally.unspaced, 0);

        let right = OperatorTally::of_line("x =   1\n");
        assert_eq!(right.over_spaced, 1);
    }

    #[test]
    fn one_sided_spacing_is_unspaced() {
        let tally = OperatorTally::of_line("x= 1\n");
        assert_eq!(tally.unspaced, 1);
        assert_eq!(tally.spaced, 0);
    }

    #[test]
    fn line_edges_count_as_no_whitespace() {
        assert_eq!(OperatorTally::of_line("-x\n").unspaced, 1);
        assert_eq!(OperatorTally::of_line("a +").unspaced, 1);
        // the terminator is whitespace
        assert_eq!(OperatorTally::of_line("a +\n").spaced, 1);
    }

    #[test]
    fn crlf_terminator_is_one_whitespace() {
        assert_eq!(
            OperatorTally::of_line("# ---\r\n"),
            OperatorTally::of_line("# ---\n")
        );
        assert_eq!(OperatorTally::of_line("# ---\r\n").over_spaced, 0);
        assert_eq!(OperatorTally::of_line("a +  \r\n").over_spaced, 1);
    }

    #[test]
    fn crlf_file_matches_lf_file() {
        let lf = ["# h\n", "x = 1 #\n", "# ---\n"];
        let crlf = ["# h\r\n", "x = 1 #\r\n", "# ---\r\n"];
        assert_eq!(OperatorSpacingCheck.run(&crlf), OperatorSpacingCheck.run(&lf));
    }

    #[test]
    fn file_totals_emit_independent_findings() {
        let findings = OperatorSpacingCheck.run(&["a=1\n", "b  = 2\n", "c = 3\n"]);
        let rendered: Vec<String> = findings.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "WHITESPACE: No whitespace found around 1 operators in file",
                "WHITESPACE: Excess whitespace found around 1 operators in file",
                "WHITESPACE: Whitespace found around 2 operators in file",
            ]
        );
        assert_eq!(findings[0].severity(), Severity::Error);
        assert_eq!(findings[1].severity(), Severity::Error);
        assert_eq!(findings[2].severity(), Severity::Info);
    }

    #[test]
    fn no_operators_no_findings() {
        assert!(OperatorSpacingCheck.run(&["print(x)\n"]).is_empty());
        assert!(OperatorSpacingCheck.run(&[]).is_empty());
    }
}
