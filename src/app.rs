// src/app.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::presentation;
use crate::report::Report;
use std::path::Path;
use std::process::ExitCode;
use syntax_sanity_core::{Source, analyze};

/// Exit status for a failed analysis under `--strict-exit`.
pub const STRICT_FAILURE_CODE: u8 = 2;

/// Reads the whole file into memory.
///
/// # Errors
///
/// Returns [`AppError::FileOpen`] when the file cannot be opened or read.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| AppError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks the configured file without printing anything.
///
/// # Errors
///
/// Returns an error only when the file cannot be read; analysis problems are
/// part of the returned report.
pub fn check_file(config: &Config) -> Result<Report> {
    let bytes = read_source(&config.path)?;
    log::info!("checking {} ({} bytes)", config.path.display(), bytes.len());

    let outcome = analyze(&Source::new(&bytes), config.checks);
    if let Err((check, diagnostic)) = &outcome {
        log::info!("{} check failed: {diagnostic}", check.name());
    }
    Ok(Report::new(&config.path, outcome))
}

/// Exit status for a finished analysis.
///
/// A failed analysis still exits with `0` unless `strict_exit` is set.
#[must_use]
pub const fn exit_status(report: &Report, strict_exit: bool) -> u8 {
    if report.passed() || !strict_exit {
        0
    } else {
        STRICT_FAILURE_CODE
    }
}

/// Checks the file, prints the report and picks the exit status.
///
/// # Errors
///
/// Returns an error when the file cannot be read or the report cannot be
/// written.
pub fn run(config: &Config) -> Result<ExitCode> {
    let report = check_file(config)?;
    presentation::print_report(&report, config.format)?;
    Ok(ExitCode::from(exit_status(&report, config.strict_exit)))
}
