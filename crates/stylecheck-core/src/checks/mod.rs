//! Heuristic style checks.
//!
//! Each check is a stateless [`Check`] that reads the whole line sequence and
//! returns its findings. [`run_checks`] runs the registry in a fixed order and
//! gathers everything into a [`Report`].
//!
//! Checks never fail: empty input, a single line, or no matches all fall
//! through to the check's "nothing found" outcome.

pub mod blank_lines;
pub mod comments;
pub mod header;
pub mod imports;
pub mod indentation;
pub mod line_length;
pub mod operators;
pub mod reserved;

use crate::finding::{Category, Finding, Report};

/// A single heuristic over the line sequence.
pub trait Check: Sync {
    /// Stable name used by `--list-checks` and in logs.
    fn name(&self) -> &'static str;

    /// Category tag attached to this check's findings.
    fn category(&self) -> Category;

    /// Scan `lines` and return findings in the order they should be reported.
    fn run(&self, lines: &[&str]) -> Vec<Finding>;
}

static REGISTRY: [&dyn Check; 11] = [
    &header::HeaderCheck,
    &imports::ImportCheck,
    &operators::OperatorSpacingCheck,
    &blank_lines::BlankInBlockCheck,
    &blank_lines::BlankBetweenDefsCheck,
    &reserved::DocstringCheck,
    &line_length::LineLengthCheck,
    &comments::CommentCheck,
    &indentation::IndentationCheck,
    &reserved::VariableNameCheck,
    &reserved::GlobalVariableCheck,
];

/// All checks, in the order they run.
pub fn registry() -> &'static [&'static dyn Check] {
    &REGISTRY
}

/// Names of all checks, in the order they run.
pub const ALL_CHECKS: &[&str] = &[
    "header",
    "imports",
    "operator-whitespace",
    "blank-lines-in-blocks",
    "blank-lines-between-definitions",
    "docstrings",
    "line-length",
    "comments",
    "indentation",
    "variable-names",
    "global-variables",
];

/// Run every registered check over `lines` and collect the findings.
#[tracing::instrument(skip(lines), fields(line_count = lines.len()))]
pub fn run_checks(lines: &[&str]) -> Report {
    let mut report = Report::new();
    for check in registry() {
        let findings = check.run(lines);
        tracing::debug!(
            check = check.name(),
            category = %check.category(),
            findings = findings.len(),
            "check finished"
        );
        report.extend(findings);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use crate::lines::split_lines;

    fn tags(findings: &[Finding]) -> Vec<String> {
        findings.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn registry_matches_names() {
        let names: Vec<&str> = registry().iter().map(|c| c.name()).collect();
        assert_eq!(names, ALL_CHECKS);
    }

    #[test]
    fn empty_file_takes_zero_branches() {
        let report = run_checks(&[]);
        assert_eq!(
            tags(&report.errors),
            vec![
                "WHITESPACE: No newlines found within functions",
                "WHITESPACE: No newlines found between functions",
                "COMMENTS: No comments detected in program",
            ]
        );
        assert_eq!(
            tags(&report.stats),
            vec![
                "HEADER: Header length: 0 lines",
                "LINE LENGTH: No lines over 79 chars in length",
                "INDENTATION: Consistent indentation throughout file",
            ]
        );
    }

    #[test]
    fn single_outcome_checks_fire_once() {
        let text = "# header\nimport os\n\n\ndef f():\n    x = 1\n\n    return x\n";
        let lines = split_lines(text);
        for check in registry() {
            let findings = check.run(&lines);
            match check.name() {
                "header" | "blank-lines-in-blocks" | "blank-lines-between-definitions"
                | "line-length" | "comments" | "indentation" => {
                    assert_eq!(findings.len(), 1, "{} fired {:?}", check.name(), findings);
                }
                "docstrings" | "variable-names" | "global-variables" => {
                    assert!(findings.is_empty());
                }
                _ => {}
            }
        }
    }

    #[test]
    fn findings_keep_check_order() {
        let text = "x=1\n";
        let report = run_checks(&split_lines(text));
        let order: Vec<Category> = report.errors.iter().map(Finding::category).collect();
        assert_eq!(
            order,
            vec![
                Category::Header,
                Category::Whitespace,
                Category::Whitespace,
                Category::Whitespace,
                Category::Comments,
            ]
        );
        assert!(report.errors.iter().all(|f| f.severity() == Severity::Error));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let text = "# a\nimport sys\nvalue=1  + 2\n";
        let lines = split_lines(text);
        assert_eq!(run_checks(&lines), run_checks(&lines));
    }

    #[test]
    fn crlf_file_reports_like_lf_file() {
        let lf = "# h\nimport os\nx = 1 #\n# ---\n\n\ndef f():\n    y  = 2\n\n    return y\n  \n";
        let crlf = lf.replace('\n', "\r\n");
        assert_eq!(
            run_checks(&split_lines(&crlf)),
            run_checks(&split_lines(lf))
        );
    }
}
