#![forbid(unsafe_code)]

//! Blocklisted component rule

use crate::config::BlocklistConfig;
use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::RuleKind;

/// Forbids references to blocklisted component IDs
///
/// Every referencing element produces its own violation, in document order.
#[derive(Debug, Clone)]
pub struct BlocklistRule {
    blocklist: BlocklistConfig,
}

impl BlocklistRule {
    pub fn new(blocklist: BlocklistConfig) -> Self {
        Self { blocklist }
    }
}

impl Rule for BlocklistRule {
    fn kind(&self) -> RuleKind {
        RuleKind::BlocklistedComponent
    }

    fn description(&self) -> &str {
        "Processes must not reference blocklisted components"
    }

    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation> {
        ctx.document
            .component_refs
            .iter()
            .filter(|r| self.blocklist.contains(&r.component_id))
            .map(|r| {
                let message = if r.label.is_empty() {
                    format!("blocklisted componentId {}", r.component_id)
                } else {
                    format!("blocklisted componentId {} (\"{}\")", r.component_id, r.label)
                };
                Violation::new(self.kind(), ctx.file_path, message).with_component(&r.component_id)
            })
            .collect()
    }
}
