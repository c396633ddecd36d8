#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All violation records (in file order, then rule order)
//! 2. One file record per checked file (in input order)
//! 3. One status record

use crate::report::Report;
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the report as JSONL
    pub fn format(&self, report: &Report) -> String {
        let mut output = String::new();

        for violation in report.violations() {
            push_record(
                &mut output,
                &ViolationRecord {
                    record_type: "violation",
                    rule: violation.rule.as_str(),
                    file: violation.file.clone(),
                    message: violation.message.clone(),
                    component_id: violation.component_id.clone(),
                },
            );
        }

        for file in &report.files {
            push_record(
                &mut output,
                &FileRecord {
                    record_type: "file",
                    file: file.path.clone(),
                    violations: file.violations.len() as u64,
                    status: if file.passed() { "pass" } else { "fail" },
                },
            );
        }

        let summary = report.summary();
        push_record(
            &mut output,
            &StatusRecord {
                record_type: "status",
                passed: summary.passed,
                files_checked: summary.files_checked as u64,
                files_failed: summary.files_failed as u64,
                total_violations: summary.total_violations as u64,
            },
        );

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Violation record for JSONL output
#[derive(Debug, Serialize)]
struct ViolationRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    rule: &'static str,
    file: PathBuf,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    component_id: Option<String>,
}

/// Per-file record for JSONL output
#[derive(Debug, Serialize)]
struct FileRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: PathBuf,
    violations: u64,
    status: &'static str,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files_checked: u64,
    files_failed: u64,
    total_violations: u64,
}
