// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use crate::report::Report;
use std::io::{self, Write};

pub const SUCCESS_MESSAGE: &str = "Code analysis passed successfully.";

/// Prints the report to the process's standard streams.
///
/// # Errors
///
/// Fails when serialization or writing to a stream fails.
pub fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_report(report, format, &mut stdout.lock(), &mut stderr.lock())
}

/// Text output sends success to `out` and failure to `err`; structured
/// formats always go to `out`.
///
/// # Errors
///
/// Fails when serialization or writing fails.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(report, out, err)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, report)?,
    }
    Ok(())
}

fn write_text(report: &Report, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    match &report.failure {
        None => writeln!(out, "{SUCCESS_MESSAGE}"),
        Some(failure) => writeln!(
            err,
            "Code analysis failed: {} at line {}",
            failure.message, failure.line
        ),
    }
}
