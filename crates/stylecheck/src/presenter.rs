//! Plain-text report rendering.
//!
//! ```text
//! ERRORS
//! ----------------------------------------------------------------------
//! HEADER: No header detected
//!
//! STATS
//! ----------------------------------------------------------------------
//! LINE LENGTH: No lines over 79 chars in length
//!
//! ```

use owo_colors::OwoColorize;

use stylecheck_core::{Finding, Report};

/// Width of the dashed rule under each section title.
pub const SEPARATOR_WIDTH: usize = 70;

const NO_ERRORS: &str = "No errors to report";

/// Render a report as the ERRORS and STATS sections.
///
/// With `color` set, only the section titles are colorized.
pub fn render(report: &Report, color: bool) -> String {
    let mut out = String::new();

    write_title(&mut out, "ERRORS", color);
    if report.is_clean() {
        out.push_str(NO_ERRORS);
        out.push_str("\n\n");
    } else {
        write_findings(&mut out, &report.errors);
    }

    write_title(&mut out, "STATS", color);
    if !report.stats.is_empty() {
        write_findings(&mut out, &report.stats);
    }

    out
}

fn write_title(out: &mut String, title: &str, color: bool) {
    if !color {
        out.push_str(title);
    } else if title == "ERRORS" {
        out.push_str(&title.red().bold().to_string());
    } else {
        out.push_str(&title.green().bold().to_string());
    }
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
}

fn write_findings(out: &mut String, findings: &[Finding]) {
    for finding in findings {
        out.push_str(&finding.to_string());
        out.push('\n');
    }
    out.push('\n');
}
