//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    /// Field the finding is about (`description`, `site.url`, ...).
    pub field: String,
    pub message: String,
}

/// Findings grouped by source file
#[derive(Debug, Default)]
pub struct ValidationReport {
    findings: BTreeMap<String, Vec<Finding>>,
}

impl ValidationReport {
    pub fn add(
        &mut self,
        source: impl Into<String>,
        severity: Severity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.findings.entry(source.into()).or_default().push(Finding {
            severity,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn error(&mut self, source: impl Into<String>, field: impl Into<String>, message: impl Into<String>) {
        self.add(source, Severity::Error, field, message);
    }

    pub fn warn(&mut self, source: impl Into<String>, field: impl Into<String>, message: impl Into<String>) {
        self.add(source, Severity::Warning, field, message);
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .values()
            .flatten()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Findings recorded for `source`.
    pub fn findings(&self, source: &str) -> &[Finding] {
        self.findings.get(source).map_or(&[], Vec::as_slice)
    }

    /// Print every finding to stderr, grouped by file.
    pub fn print(&self) {
        for (path, findings) in &self.findings {
            eprintln!();
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for f in findings {
                match f.severity {
                    Severity::Error => {
                        eprintln!("{} {} {}", "→".red(), f.field.bold(), f.message)
                    }
                    Severity::Warning => {
                        eprintln!("{} {} {}", "→".yellow(), f.field.bold(), f.message.dimmed())
                    }
                }
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 && warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }

        write!(
            f,
            "{} {} {}, {} {}",
            "found".dimmed(),
            errors.to_string().red().bold(),
            format!("error{}", plural_s(errors)).dimmed(),
            warnings.to_string().yellow().bold(),
            format!("warning{}", plural_s(warnings)).dimmed()
        )
    }
}
