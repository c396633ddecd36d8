#![forbid(unsafe_code)]

//! boomi-guard: compliance checks for Boomi process XML
//!
//! Every process must end an error path in a `returndocuments` shape labeled
//! with "Error", and no process may reference a blocklisted component. The
//! checker runs once per CI job over the changed files and reports through
//! stdout, a markdown report file and the job summary.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod process;
pub mod report;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, GuardError, ProcessError, RuleError};

// Re-export core domain types for convenient access
pub use report::{FileResult, Report, Summary};
pub use rules::Violation;
pub use types::RuleKind;
