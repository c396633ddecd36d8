#![forbid(unsafe_code)]

//! Report destinations outside stdout
//!
//! The markdown report is written to a file the CI workflow picks up for the
//! pull request comment, and appended to the GitHub Actions job summary.

use crate::error::GuardError;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Environment variable naming the job summary file
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Write `markdown` to `path`, replacing any previous report
///
/// # Errors
///
/// Returns `GuardError::Report` if the file cannot be written.
pub fn write_report_file(path: &Path, markdown: &str) -> Result<(), GuardError> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, markdown)
    };

    write().map_err(|source| GuardError::Report {
        path: path.to_path_buf(),
        source,
    })
}

/// Append `markdown` to the job summary if `GITHUB_STEP_SUMMARY` is set
///
/// Returns `Ok(false)` when the variable is unset or empty.
pub fn append_step_summary(markdown: &str) -> io::Result<bool> {
    let Some(target) = std::env::var_os(STEP_SUMMARY_ENV).filter(|v| !v.is_empty()) else {
        return Ok(false);
    };

    let mut file = OpenOptions::new().create(true).append(true).open(target)?;
    writeln!(file, "{}", markdown)?;
    Ok(true)
}
