//! CLI argument parsing using clap

use crate::config::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// boomi-guard CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "boomi-guard")]
#[command(about = "Compliance checks for Boomi process XML files in CI")]
#[command(version)]
pub struct Cli {
    /// Process XML files to check (usually the files changed in a pull request)
    pub files: Vec<PathBuf>,

    /// Output format printed to stdout (defaults to the configured format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to ./boomi-guard.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Markdown report destination (overrides the configured report_file)
    #[arg(long)]
    pub report_file: Option<PathBuf>,

    /// Output coloring for the human format
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_args() {
        let cli = Cli::parse_from(["boomi-guard"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.format, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.report_file, None);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_files_in_order() {
        let cli = Cli::parse_from(["boomi-guard", "b.xml", "a.xml"]);
        assert_eq!(cli.files, vec![PathBuf::from("b.xml"), PathBuf::from("a.xml")]);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["boomi-guard", "--format", "jsonl", "a.xml"]);
        assert_eq!(cli.format, Some(OutputFormat::Jsonl));

        let cli = Cli::parse_from(["boomi-guard", "-f", "human", "a.xml"]);
        assert_eq!(cli.format, Some(OutputFormat::Human));

        let cli = Cli::parse_from(["boomi-guard", "-f", "markdown", "a.xml"]);
        assert_eq!(cli.format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_config_and_report_file() {
        let cli = Cli::parse_from([
            "boomi-guard",
            "-c",
            "ci/guard.toml",
            "--report-file",
            "out.md",
            "a.xml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("ci/guard.toml")));
        assert_eq!(cli.report_file, Some(PathBuf::from("out.md")));
        assert_eq!(cli.files, vec![PathBuf::from("a.xml")]);
    }

    #[test]
    fn test_color_flag() {
        let cli = Cli::parse_from(["boomi-guard", "--color", "never", "a.xml"]);
        assert_eq!(cli.color, ColorChoice::Never);

        let cli = Cli::parse_from(["boomi-guard", "--color", "always"]);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn test_help_contains_about() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Boomi process XML"));
    }

    #[test]
    fn test_invalid_format() {
        let result = Cli::try_parse_from(["boomi-guard", "--format", "xml", "a.xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_color() {
        let result = Cli::try_parse_from(["boomi-guard", "--color", "invalid", "a.xml"]);
        assert!(result.is_err());
    }
}
