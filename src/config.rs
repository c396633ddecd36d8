//! Configuration file parsing and validation

pub mod guard_toml;

pub use guard_toml::{
    BlocklistConfig, CONFIG_FILE_NAME, Config, DEFAULT_BLOCKLIST, DEFAULT_REPORT_FILE,
    OutputConfig, OutputFormat,
};
