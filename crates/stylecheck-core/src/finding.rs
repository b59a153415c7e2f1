//! Findings and the two-bucket report.

use std::fmt;

/// Whether a finding is a style violation or a descriptive statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A style violation, listed under ERRORS.
    Error,
    /// A descriptive statistic, listed under STATS.
    Info,
}

/// The area of style a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Leading comment block.
    Header,
    /// Import statement placement.
    Import,
    /// Operator spacing and blank-line usage.
    Whitespace,
    /// Physical line length.
    LineLength,
    /// Comment density.
    Comments,
    /// Indentation consistency.
    Indentation,
    /// Docstring presence (reserved).
    Docstrings,
    /// Descriptive variable names (reserved).
    Naming,
    /// Global variable usage (reserved).
    Globals,
}

impl Category {
    /// The tag printed in front of every finding message.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Header => "HEADER",
            Self::Import => "IMPORT",
            Self::Whitespace => "WHITESPACE",
            Self::LineLength => "LINE LENGTH",
            Self::Comments => "COMMENTS",
            Self::Indentation => "INDENTATION",
            Self::Docstrings => "DOCSTRINGS",
            Self::Naming => "NAMING",
            Self::Globals => "GLOBALS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single reported observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    severity: Severity,
    category: Category,
    message: String,
}

impl Finding {
    /// A style violation.
    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    /// A descriptive statistic.
    pub fn info(category: Category, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            category,
            message: message.into(),
        }
    }

    /// Severity of this finding.
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Category of this finding.
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Message text, without the category tag.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Findings from one run, split by severity and kept in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// ERROR findings.
    pub errors: Vec<Finding>,
    /// INFO findings.
    pub stats: Vec<Finding>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding to the list matching its severity.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Info => self.stats.push(finding),
        }
    }

    /// `true` if no style violations were found.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Extend<Finding> for Report {
    fn extend<T: IntoIterator<Item = Finding>>(&mut self, iter: T) {
        for finding in iter {
            self.push(finding);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_display_prefixes_tag() {
        let f = Finding::info(Category::LineLength, "No lines over 79 chars in length");
        assert_eq!(
            f.to_string(),
            "LINE LENGTH: No lines over 79 chars in length"
        );
    }

    #[test]
    fn report_routes_by_severity() {
        let mut report = Report::new();
        report.extend([
            Finding::error(Category::Header, "No header detected"),
            Finding::info(Category::Comments, "2 comments detected in program"),
            Finding::error(Category::Indentation, "x"),
        ]);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.stats.len(), 1);
        assert_eq!(report.errors[0].category(), Category::Header);
        assert_eq!(report.errors[1].category(), Category::Indentation);
        assert!(!report.is_clean());
    }
}
