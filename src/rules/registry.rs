#![forbid(unsafe_code)]

//! Rule registry
//!
//! Holds the rules applied to every parsed process file, in the order their
//! violations appear in the report.

use crate::config::Config;
use crate::error::RuleError;
use crate::rules::{BlocklistRule, ErrorHandlerRule, Rule};

/// Ordered collection of enabled rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build the registry of built-in rules from configuration
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if a built-in rule cannot be constructed.
    pub fn build_from_config(config: &Config) -> Result<Self, RuleError> {
        let mut registry = Self::new();
        registry.add_rule(Box::new(ErrorHandlerRule::new()?));
        registry.add_rule(Box::new(BlocklistRule::new(config.blocklist.clone())));
        Ok(registry)
    }

    /// Append a rule
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Iterate over rules in execution order
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
