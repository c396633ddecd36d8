#![forbid(unsafe_code)]

//! Core domain types for boomi-guard
//!
//! This module defines the fundamental identifiers shared by rules, the
//! engine and the output formatters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the check that produced a violation
///
/// Serialized in kebab-case so that report consumers see the same
/// identifiers as the human and markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// The file could not be read or is not well-formed XML
    ParseError,
    /// No `returndocuments` shape labeled with "Error"
    MissingErrorHandler,
    /// A `componentId` matched the configured blocklist
    BlocklistedComponent,
}

impl RuleKind {
    /// All rule kinds in report order
    pub const ALL: [RuleKind; 3] = [
        RuleKind::ParseError,
        RuleKind::MissingErrorHandler,
        RuleKind::BlocklistedComponent,
    ];

    /// Returns the rule identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::ParseError => "parse-error",
            RuleKind::MissingErrorHandler => "missing-error-handler",
            RuleKind::BlocklistedComponent => "blocklisted-component",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_identifiers() {
        assert_eq!(RuleKind::ParseError.as_str(), "parse-error");
        assert_eq!(
            RuleKind::MissingErrorHandler.to_string(),
            "missing-error-handler"
        );
        assert_eq!(
            RuleKind::BlocklistedComponent.as_str(),
            "blocklisted-component"
        );
    }

    #[test]
    fn test_rule_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&RuleKind::BlocklistedComponent).unwrap();
        assert_eq!(json, "\"blocklisted-component\"");

        let kind: RuleKind = serde_json::from_str("\"missing-error-handler\"").unwrap();
        assert_eq!(kind, RuleKind::MissingErrorHandler);
    }
}
