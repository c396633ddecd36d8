//! Parsing and validation for boomi-guard.toml configuration files

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "boomi-guard.toml";

/// Markdown report written after every run
pub const DEFAULT_REPORT_FILE: &str = "boomi-xml-validation-results.md";

/// Component IDs forbidden when no configuration file overrides them
pub const DEFAULT_BLOCKLIST: [&str; 4] = [
    "ab12cd34-5678-90ef-ghij-klmnopqrstuv",
    "ff00aa11-2233-4455-6677-889900bbccdd",
    "151411ac-6724-21ae-giz-00000000azz1a",
    "12345678-9abc-def0-1234-56789abcdef0",
];

/// Main configuration struct for boomi-guard.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Blocklist rule settings
    #[serde(default)]
    pub blocklist: BlocklistConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(s)?;
        config.validate()?;
        config.blocklist.normalize();
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(blank) = self
            .blocklist
            .blocklisted_ids
            .iter()
            .find(|id| id.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "blocklisted_ids contains a blank entry {:?}",
                blank
            )));
        }

        Ok(())
    }
}

/// `[blocklist]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlocklistConfig {
    /// Component IDs that must not appear in any process
    #[serde(default = "default_blocklisted_ids")]
    pub blocklisted_ids: BTreeSet<String>,
}

impl BlocklistConfig {
    /// Returns true if `component_id` is blocklisted
    pub fn contains(&self, component_id: &str) -> bool {
        self.blocklisted_ids.contains(component_id)
    }

    fn normalize(&mut self) {
        self.blocklisted_ids = self
            .blocklisted_ids
            .iter()
            .map(|id| id.trim().to_string())
            .collect();
    }
}

impl Default for BlocklistConfig {
    fn default() -> Self {
        Self {
            blocklisted_ids: default_blocklisted_ids(),
        }
    }
}

fn default_blocklisted_ids() -> BTreeSet<String> {
    DEFAULT_BLOCKLIST.iter().map(|id| id.to_string()).collect()
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format printed to stdout when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Markdown report destination; an empty path disables it
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,

    /// Append the markdown report to `$GITHUB_STEP_SUMMARY` when set
    #[serde(default = "default_true")]
    pub step_summary: bool,
}

impl OutputConfig {
    /// Returns the report destination, or None when disabled
    pub fn report_path(&self) -> Option<&Path> {
        if self.report_file.as_os_str().is_empty() {
            None
        } else {
            Some(&self.report_file)
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown,
            report_file: default_report_file(),
            step_summary: true,
        }
    }
}

fn default_report_file() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_FILE)
}

fn default_true() -> bool {
    true
}

/// Output format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown report suitable for a CI summary or PR comment
    #[default]
    Markdown,
    /// Plain text, one line per violation
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}
