#![forbid(unsafe_code)]

//! Validation report
//!
//! A `Report` is the only value the engine produces. Formatters render it;
//! nothing else reads it.

use crate::rules::Violation;
use crate::types::RuleKind;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of checking a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    /// Path as given on the command line
    pub path: PathBuf,

    /// Violations in the order they were produced
    pub violations: Vec<Violation>,
}

impl FileResult {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            violations: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if the file could not be parsed
    pub fn parse_failed(&self) -> bool {
        self.violations.iter().any(|v| v.rule == RuleKind::ParseError)
    }

    /// Number of violations produced by `rule`
    pub fn count(&self, rule: RuleKind) -> usize {
        self.violations.iter().filter(|v| v.rule == rule).count()
    }
}

/// Aggregate counts over a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files_checked: usize,
    pub files_passed: usize,
    pub files_failed: usize,
    pub total_violations: usize,
    pub passed: bool,
}

/// Results for every file checked in one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub files: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: FileResult) {
        self.files.push(result);
    }

    /// A report passes iff it holds no violations
    pub fn passed(&self) -> bool {
        self.files.iter().all(FileResult::passed)
    }

    /// All violations in file order
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.files.iter().flat_map(|f| f.violations.iter())
    }

    /// Total violations per rule, in `RuleKind::ALL` order
    pub fn counts_by_rule(&self) -> Vec<(RuleKind, usize)> {
        RuleKind::ALL
            .into_iter()
            .map(|rule| (rule, self.files.iter().map(|f| f.count(rule)).sum()))
            .collect()
    }

    pub fn summary(&self) -> Summary {
        let files_passed = self.files.iter().filter(|f| f.passed()).count();
        Summary {
            files_checked: self.files.len(),
            files_passed,
            files_failed: self.files.len() - files_passed,
            total_violations: self.violations().count(),
            passed: self.passed(),
        }
    }
}
