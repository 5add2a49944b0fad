//! Runs the checks in order and stops at the first failure.

use serde::Serialize;

use crate::brackets::check_brackets;
use crate::diagnostic::Diagnostic;
use crate::source::Source;
use crate::termination::check_semicolons;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
    Brackets,
    Semicolons,
}

impl Check {
    /// # Errors
    ///
    /// Returns the first problem this check finds.
    pub fn run(self, source: &Source<'_>) -> Result<(), Diagnostic> {
        match self {
            Self::Brackets => check_brackets(source),
            Self::Semicolons => check_semicolons(source),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brackets => "brackets",
            Self::Semicolons => "semicolons",
        }
    }
}

/// Which checks to run. `All` runs brackets first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckSelection {
    #[default]
    All,
    Brackets,
    Semicolons,
}

impl CheckSelection {
    #[must_use]
    pub const fn checks(self) -> &'static [Check] {
        match self {
            Self::All => &[Check::Brackets, Check::Semicolons],
            Self::Brackets => &[Check::Brackets],
            Self::Semicolons => &[Check::Semicolons],
        }
    }
}

/// Runs the selected checks over `source`.
///
/// # Errors
///
/// Returns the failing check together with its diagnostic. Later checks are
/// not run once one fails.
pub fn analyze(source: &Source<'_>, selection: CheckSelection) -> Result<(), (Check, Diagnostic)> {
    for &check in selection.checks() {
        log::trace!("running {} check over {} bytes", check.name(), source.len());
        check.run(source).map_err(|diag| (check, diag))?;
    }
    Ok(())
}
