#![forbid(unsafe_code)]

//! Rule definitions and registry

mod blocklist;
mod error_handler;
mod registry;
mod rule;

// Re-export core types
pub use blocklist::BlocklistRule;
pub use error_handler::ErrorHandlerRule;
pub use registry::RuleRegistry;
pub use rule::{ExecutionContext, Rule, Violation};
