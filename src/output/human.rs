#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! One line per violation, followed by per-file results and a final
//! PASSED/FAILED line. Color is applied through `termcolor` so the same code
//! path serves terminals and plain buffers.

use crate::report::Report;
use std::io;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the report without color
    pub fn format(&self, report: &Report) -> String {
        let mut buffer = Buffer::no_color();
        // Writing into an in-memory buffer cannot fail
        let _ = self.write(report, &mut buffer);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Write the report to stdout using the given color choice
    pub fn write_to_stdout(&self, report: &Report, color: ColorChoice) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(color);
        self.write(report, &mut stdout)
    }

    /// Write the report to any color-capable writer
    pub fn write(&self, report: &Report, out: &mut dyn WriteColor) -> io::Result<()> {
        let violations: Vec<_> = report.violations().collect();
        if !violations.is_empty() {
            for violation in &violations {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(out, "{}", violation.rule)?;
                out.reset()?;
                writeln!(out, ": {} - {}", violation.file.display(), violation.message)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "Results:")?;
        if report.files.is_empty() {
            writeln!(out, "  No files checked.")?;
        }
        for file in &report.files {
            if file.passed() {
                write!(out, "  ")?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "✓")?;
                out.reset()?;
                writeln!(out, " {}", file.path.display())?;
            } else {
                write!(out, "  ")?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(out, "✗")?;
                out.reset()?;
                writeln!(
                    out,
                    " {} ({} violation(s))",
                    file.path.display(),
                    file.violations.len()
                )?;
            }
        }
        writeln!(out)?;

        let summary = report.summary();
        if summary.passed {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "Check PASSED")?;
            out.reset()?;
            writeln!(out, ": {} file(s) checked", summary.files_checked)?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "Check FAILED")?;
            out.reset()?;
            writeln!(
                out,
                ": {} of {} file(s) failed, {} violation(s)",
                summary.files_failed, summary.files_checked, summary.total_violations
            )?;
        }

        out.flush()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
