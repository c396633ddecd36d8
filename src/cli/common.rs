//! Common helper functions for the CLI
//!
//! Exit codes, configuration discovery and color resolution.

use crate::cli::args::ColorChoice;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::ConfigError;
use std::io::IsTerminal;
use std::path::Path;

/// All files passed all rules
pub const EXIT_SUCCESS: i32 = 0;
/// One or more files failed one or more rules
pub const EXIT_FAILED: i32 = 1;
/// Invalid usage or a fatal error prevented validation from completing
pub const EXIT_ERROR: i32 = 2;

/// Load configuration
///
/// An explicit path must exist. Without one, `boomi-guard.toml` in the
/// working directory is used if present, and the built-in defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path).map_err(|e| match e {
            ConfigError::Io(io) => ConfigError::Io(std::io::Error::new(
                io.kind(),
                format!("{}: {}", path.display(), io),
            )),
            other => other,
        });
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        return Config::load(default_path);
    }

    Ok(Config::default())
}

/// Map the CLI color choice onto termcolor, disabling color when stdout is
/// not a terminal
pub(crate) fn resolve_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_FAILED, 1);
        assert_eq!(EXIT_ERROR, 2);
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[blocklist]\nblocklisted_ids = [\"legacy-123\"]\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.blocklist.contains("legacy-123"));
    }

    #[test]
    fn test_load_missing_explicit_config_names_path() {
        let result = load_config(Some(Path::new("/nonexistent/guard.toml")));
        match result {
            Err(ConfigError::Io(e)) => assert!(e.to_string().contains("/nonexistent/guard.toml")),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_color_explicit() {
        assert_eq!(
            resolve_color(ColorChoice::Always),
            termcolor::ColorChoice::Always
        );
        assert_eq!(
            resolve_color(ColorChoice::Never),
            termcolor::ColorChoice::Never
        );
    }
}
