#![forbid(unsafe_code)]

//! Core Rule trait and related types for defining and executing rules

use crate::process::ProcessDocument;
use crate::types::RuleKind;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Execution context provided to rules when they execute
///
/// This contains all the information a rule needs to analyze a process file.
#[derive(Debug)]
pub struct ExecutionContext<'a> {
    /// Path to the file being analyzed
    pub file_path: &'a Path,

    /// Parsed process document
    pub document: &'a ProcessDocument,
}

/// A single finding reported against a process file
///
/// Violations are immutable once created and are reported in the order the
/// engine produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule that produced this violation
    pub rule: RuleKind,

    /// File the violation was found in
    pub file: PathBuf,

    /// Human-readable message describing the violation
    pub message: String,

    /// Offending component for `blocklisted-component` violations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
}

impl Violation {
    /// Creates a violation with no component reference
    pub fn new(rule: RuleKind, file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            rule,
            file: file.into(),
            message: message.into(),
            component_id: None,
        }
    }

    /// Attaches the offending component ID
    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }
}

/// Trait that all rules must implement
pub trait Rule {
    /// Returns the identifier reported on this rule's violations
    fn kind(&self) -> RuleKind;

    /// Returns a human-readable description of what this rule checks
    fn description(&self) -> &str;

    /// Executes the rule against the provided context
    ///
    /// Returns an empty vector if the document complies.
    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation>;
}
