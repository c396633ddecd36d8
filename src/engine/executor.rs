#![forbid(unsafe_code)]

//! Execution engine for running rules across process files
//!
//! Files are checked one at a time in the order given. Each file yields its
//! own `FileResult`, so a file that fails to parse is recorded and the run
//! moves on to the next one.

use crate::process::ProcessDocument;
use crate::report::{FileResult, Report};
use crate::rules::{ExecutionContext, RuleRegistry, Violation};
use crate::types::RuleKind;
use std::path::{Path, PathBuf};

/// Execution engine that applies every registered rule to every file
pub struct ExecutionEngine {
    registry: RuleRegistry,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine with the provided rule registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Execute all rules against the given files, in order
    pub fn execute(&self, files: &[PathBuf]) -> Report {
        let mut report = Report::new();
        for path in files {
            report.push(self.execute_file(path));
        }
        report
    }

    /// Read, parse and check a single file
    ///
    /// Read and parse failures become a single `parse-error` violation and no
    /// rules run on that file.
    pub fn execute_file(&self, path: &Path) -> FileResult {
        let mut result = FileResult::new(path);

        let document = match ProcessDocument::read(path) {
            Ok(document) => document,
            Err(e) => {
                result
                    .violations
                    .push(Violation::new(RuleKind::ParseError, path, e.to_string()));
                return result;
            }
        };

        let ctx = ExecutionContext {
            file_path: path,
            document: &document,
        };
        for rule in self.registry.iter_rules() {
            result.violations.extend(rule.execute(&ctx));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BlocklistConfig, Config};
    use std::fs;
    use tempfile::TempDir;

    fn engine_with_blocklist(ids: &[&str]) -> ExecutionEngine {
        let config = Config {
            blocklist: BlocklistConfig {
                blocklisted_ids: ids.iter().map(|id| id.to_string()).collect(),
            },
            ..Config::default()
        };
        ExecutionEngine::new(RuleRegistry::build_from_config(&config).unwrap())
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_clean_file_has_no_violations() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "ok.xml",
            r#"<process><shape shapetype="returndocuments" userlabel="Error Exit"/></process>"#,
        );

        let result = engine_with_blocklist(&["legacy-123"]).execute_file(&path);
        assert!(result.passed());
        assert_eq!(result.path, path);
    }

    #[test]
    fn test_both_rules_report_on_same_file() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.xml",
            r#"<process><shape shapetype="returndocuments" userlabel="Success path" componentId="legacy-123"/></process>"#,
        );

        let result = engine_with_blocklist(&["legacy-123"]).execute_file(&path);
        let rules: Vec<RuleKind> = result.violations.iter().map(|v| v.rule).collect();
        assert_eq!(
            rules,
            vec![RuleKind::MissingErrorHandler, RuleKind::BlocklistedComponent]
        );
    }

    #[test]
    fn test_parse_error_skips_rules() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.xml", "<process><shape></process>");

        let result = engine_with_blocklist(&[]).execute_file(&path);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, RuleKind::ParseError);
        assert!(result.violations[0].message.contains("XML parse error"));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let result = engine_with_blocklist(&[]).execute_file(Path::new("/nonexistent/p.xml"));
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, RuleKind::ParseError);
        assert_eq!(result.violations[0].message, "File not found.");
    }

    #[test]
    fn test_parse_error_does_not_stop_run() {
        let dir = TempDir::new().unwrap();
        let broken = write(&dir, "a.xml", "not xml at all <");
        let failing = write(
            &dir,
            "b.xml",
            r#"<process><shape shapetype="returndocuments" userlabel="Done"/></process>"#,
        );
        let clean = write(
            &dir,
            "c.xml",
            r#"<process><shape shapetype="returndocuments" userlabel="error"/></process>"#,
        );

        let report = engine_with_blocklist(&[]).execute(&[broken.clone(), failing, clean]);

        assert_eq!(report.files.len(), 3);
        assert_eq!(report.files[0].path, broken);
        assert!(report.files[0].parse_failed());
        assert_eq!(
            report.files[1].violations[0].rule,
            RuleKind::MissingErrorHandler
        );
        assert!(report.files[2].passed());
        assert!(!report.passed());
    }

    #[test]
    fn test_execute_preserves_input_order() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<process><shape shapetype="returndocuments" userlabel="Error"/></process>"#;
        let second = write(&dir, "z.xml", xml);
        let first = write(&dir, "a.xml", xml);

        let report = engine_with_blocklist(&[]).execute(&[second.clone(), first.clone()]);
        let paths: Vec<PathBuf> = report.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths, vec![second, first]);
        assert!(report.passed());
    }
}
