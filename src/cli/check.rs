//! Check command implementation
//!
//! This module implements the single `boomi-guard` run, which:
//! - Loads configuration (explicit file, ./boomi-guard.toml or defaults)
//! - Checks every given file in order
//! - Writes the markdown report file and the CI job summary
//! - Prints the report to stdout in the selected format
//! - Returns the exit code

use crate::cli::args::Cli;
use crate::cli::common::{EXIT_ERROR, EXIT_FAILED, EXIT_SUCCESS, load_config, resolve_color};
use crate::config::{Config, OutputFormat};
use crate::engine::ExecutionEngine;
use crate::error::GuardError;
use crate::output::{
    HumanFormatter, JsonlFormatter, MarkdownFormatter, append_step_summary, write_report_file,
};
use crate::report::Report;
use crate::rules::RuleRegistry;
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: boomi-guard <file1.xml> [file2.xml ...]";

/// Run the check
///
/// # Returns
///
/// Exit code:
/// - 0: Success (every file passed every rule)
/// - 1: Failed (at least one violation, parse errors included)
/// - 2: Error (no files, configuration or report I/O error)
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_inner(cli) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_FAILED,
        Err(GuardError::NoInputFiles) => {
            eprintln!("{}", USAGE);
            EXIT_ERROR
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the check
///
/// Returns whether the report passed.
fn run_check_inner(cli: &Cli) -> Result<bool, GuardError> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);
    let report_path = cli
        .report_file
        .clone()
        .or_else(|| config.output.report_path().map(Path::to_path_buf));

    let markdown = MarkdownFormatter::new();

    if cli.files.is_empty() {
        let stub = markdown.format_no_files();
        publish(&stub, report_path.as_deref(), &config)?;
        print!("{}", stub);
        return Err(GuardError::NoInputFiles);
    }

    let registry = RuleRegistry::build_from_config(&config)?;

    if format == OutputFormat::Human {
        eprintln!(
            "Checking {} file(s) with {} rules...",
            cli.files.len(),
            registry.len()
        );
    }

    let engine = ExecutionEngine::new(registry);
    let report = engine.execute(&cli.files);

    publish(&markdown.format(&report), report_path.as_deref(), &config)?;
    print_report(&report, format, cli)?;

    Ok(report.passed())
}

/// Write the markdown report to the report file and the job summary
fn publish(markdown: &str, report_path: Option<&Path>, config: &Config) -> Result<(), GuardError> {
    if let Some(path) = report_path {
        write_report_file(path, markdown)?;
    }

    if config.output.step_summary
        && let Err(e) = append_step_summary(markdown)
    {
        eprintln!("Warning: Failed to write job summary: {}", e);
    }

    Ok(())
}

fn print_report(report: &Report, format: OutputFormat, cli: &Cli) -> Result<(), GuardError> {
    match format {
        OutputFormat::Markdown => print!("{}", MarkdownFormatter::new().format(report)),
        OutputFormat::Human => {
            HumanFormatter::new().write_to_stdout(report, resolve_color(cli.color))?
        }
        OutputFormat::Jsonl => print!("{}", JsonlFormatter::new().format(report)),
    }
    Ok(())
}

/// Check `files` with an explicit configuration, without touching any
/// report destination
///
/// Returns the exit code the CLI would return for the same report.
pub fn check_files(files: &[PathBuf], config: &Config) -> Result<(Report, i32), GuardError> {
    if files.is_empty() {
        return Err(GuardError::NoInputFiles);
    }

    let registry = RuleRegistry::build_from_config(config)?;
    let report = ExecutionEngine::new(registry).execute(files);
    let code = if report.passed() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILED
    };
    Ok((report, code))
}
