//! Error types for boomi-guard
//!
//! Per-file problems (`ProcessError`) are turned into `parse-error`
//! violations by the engine. Only `ConfigError` and `GuardError` abort a run.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Syntactically valid configuration with an invalid value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// Errors raised while reading or parsing a single process file
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// File does not exist
    #[error("File not found.")]
    NotFound,

    /// File exists but could not be read
    #[error("Failed to read file: {0}")]
    Read(#[source] std::io::Error),

    /// Malformed XML
    #[error("XML parse error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// Document ended with open elements
    #[error("XML parse error: unclosed element <{0}> at end of document")]
    Unclosed(String),

    /// Document has no root element
    #[error("XML parse error: document has no root element")]
    NoRootElement,
}

/// Top-level error type for boomi-guard
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// No input files supplied
    #[error("No XML files provided.")]
    NoInputFiles,

    /// Report could not be written
    #[error("Failed to write report to {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_display() {
        assert_eq!(ProcessError::NotFound.to_string(), "File not found.");
        assert_eq!(
            ProcessError::Unclosed("process".to_string()).to_string(),
            "XML parse error: unclosed element <process> at end of document"
        );
        let err = ProcessError::Xml {
            position: 42,
            message: "mismatched end tag".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "XML parse error at byte 42: mismatched end tag"
        );
    }

    #[test]
    fn test_guard_error_from_config() {
        let err: GuardError = ConfigError::Validation("empty id".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration: empty id"
        );
    }
}
