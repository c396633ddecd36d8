//! CLI argument parsing and the check command

pub mod args;
pub mod check;
pub mod common;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice};
