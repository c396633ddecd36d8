#![forbid(unsafe_code)]

//! Error-handling rule
//!
//! A process passes when at least one `returndocuments` shape carries a label
//! containing "error" in any letter case.

use crate::error::RuleError;
use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::RuleKind;
use regex::{Regex, RegexBuilder};

/// Requires a `returndocuments` shape labeled with "Error"
pub struct ErrorHandlerRule {
    label_pattern: Regex,
}

impl std::fmt::Debug for ErrorHandlerRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorHandlerRule")
            .field("label_pattern", &self.label_pattern.as_str())
            .finish()
    }
}

impl ErrorHandlerRule {
    /// Keyword an error path label must contain
    pub const LABEL_KEYWORD: &'static str = "error";

    /// Creates the rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the label pattern fails to compile.
    pub fn new() -> Result<Self, RuleError> {
        let label_pattern = RegexBuilder::new(&regex::escape(Self::LABEL_KEYWORD))
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::InvalidRegex(e.to_string()))?;
        Ok(Self { label_pattern })
    }

    /// Returns true if `label` names an error path
    pub fn is_error_label(&self, label: &str) -> bool {
        self.label_pattern.is_match(label)
    }
}

impl Rule for ErrorHandlerRule {
    fn kind(&self) -> RuleKind {
        RuleKind::MissingErrorHandler
    }

    fn description(&self) -> &str {
        "Every process must end an error path in a returndocuments shape labeled with 'Error'"
    }

    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation> {
        let mut labels = Vec::new();
        for shape in ctx.document.shapes.iter().filter(|s| s.is_return_documents()) {
            if self.is_error_label(&shape.label) {
                return vec![];
            }
            labels.push(if shape.label.is_empty() {
                "(no label)"
            } else {
                shape.label.as_str()
            });
        }

        let message = if labels.is_empty() {
            "no returndocuments shape found".to_string()
        } else {
            format!(
                "returndocuments shape found, but none labeled with 'Error'. Found labels: {}",
                labels.join(", ")
            )
        };

        vec![Violation::new(self.kind(), ctx.file_path, message)]
    }
}
