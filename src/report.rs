// src/report.rs
use serde::Serialize;
use std::path::{Path, PathBuf};
use syntax_sanity_core::{Check, Diagnostic, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
}

/// The first problem found, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub check: Check,
    pub kind: ErrorKind,
    pub message: &'static str,
    /// 1-based; `0` when the line is unknown.
    pub line: usize,
}

impl Failure {
    #[must_use]
    pub const fn new(check: Check, diagnostic: Diagnostic) -> Self {
        Self {
            check,
            kind: diagnostic.kind,
            message: diagnostic.message(),
            line: diagnostic.line,
        }
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

impl Report {
    #[must_use]
    pub fn new(path: &Path, outcome: Result<(), (Check, Diagnostic)>) -> Self {
        match outcome {
            Ok(()) => Self {
                path: path.to_path_buf(),
                status: Status::Passed,
                failure: None,
            },
            Err((check, diagnostic)) => Self {
                path: path.to_path_buf(),
                status: Status::Failed,
                failure: Some(Failure::new(check, diagnostic)),
            },
        }
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.status, Status::Passed)
    }
}
