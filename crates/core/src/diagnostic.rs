use serde::Serialize;
use thiserror::Error;

/// Problems the checks can report. Each run reports at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[error("Unmatched closing bracket")]
    UnmatchedClosingBracket,
    #[error("Mismatched brackets")]
    MismatchedBrackets,
    #[error("Unmatched opening bracket")]
    UnmatchedOpeningBracket,
    #[error("Missing semicolon at the end of the line")]
    MissingSemicolon,
}

impl ErrorKind {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnmatchedClosingBracket => "Unmatched closing bracket",
            Self::MismatchedBrackets => "Mismatched brackets",
            Self::UnmatchedOpeningBracket => "Unmatched opening bracket",
            Self::MissingSemicolon => "Missing semicolon at the end of the line",
        }
    }

    /// Attaches a line number; `0` means the position is unknown.
    #[must_use]
    pub const fn at_line(self, line: usize) -> Diagnostic {
        Diagnostic { kind: self, line }
    }
}

/// First problem found in a file.
///
/// `line` is 1-based, or `0` when the problem cannot be pinned to a line
/// (an opener left on the stack at end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[error("{kind} at line {line}")]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub line: usize,
}

impl Diagnostic {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}
