#![forbid(unsafe_code)]

//! Markdown report formatter
//!
//! The markdown report is what CI posts as the job summary and the pull
//! request comment. It is also the default stdout format.

use crate::report::{FileResult, Report};

/// Heading shared by every markdown report
pub const REPORT_TITLE: &str = "## Boomi XML Validation Results";

/// Markdown report formatter
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        MarkdownFormatter
    }

    /// Format the report as markdown, ending with a single newline
    pub fn format(&self, report: &Report) -> String {
        let summary = report.summary();
        let mut lines: Vec<String> = vec![REPORT_TITLE.to_string(), String::new()];

        lines.push(format!(
            "**Summary:** {}/{} file(s) passed.",
            summary.files_passed, summary.files_checked
        ));
        lines.push(String::new());

        lines.push("| Files checked | Passed | Failed | Violations |".to_string());
        lines.push("|---|---|---|---|".to_string());
        lines.push(format!(
            "| {} | {} | {} | {} |",
            summary.files_checked,
            summary.files_passed,
            summary.files_failed,
            summary.total_violations
        ));
        lines.push(String::new());

        if !summary.passed {
            lines.push("| Rule | Violations |".to_string());
            lines.push("|---|---|".to_string());
            for (rule, count) in report.counts_by_rule() {
                lines.push(format!("| `{}` | {} |", rule, count));
            }
            lines.push(String::new());
        }

        for file in &report.files {
            self.push_file(&mut lines, file);
        }

        finish(lines)
    }

    /// Report written when the run was invoked without any files
    pub fn format_no_files(&self) -> String {
        finish(vec![
            REPORT_TITLE.to_string(),
            String::new(),
            "❌ No XML files provided.".to_string(),
        ])
    }

    fn push_file(&self, lines: &mut Vec<String>, file: &FileResult) {
        let path = file.path.display();
        if file.passed() {
            lines.push(format!("### ✅ PASS: `{}`", path));
            lines.push(String::new());
            lines.push("- ✅ All checks passed.".to_string());
        } else {
            lines.push(format!("### ❌ FAIL: `{}`", path));
            lines.push(String::new());
            lines.push("| Rule | Message |".to_string());
            lines.push("|---|---|".to_string());
            for violation in &file.violations {
                lines.push(format!(
                    "| `{}` | {} |",
                    violation.rule,
                    escape_cell(&violation.message)
                ));
            }
        }
        lines.push(String::new());
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut output = lines.join("\n").trim_end().to_string();
    output.push('\n');
    output
}

/// Table cells cannot contain pipes or line breaks
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
