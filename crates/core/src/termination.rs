//! Line-based statement terminator heuristic.
//!
//! This is not a parser. A non-empty line must end in `;` or `}` unless it
//! mentions a brace, sits inside what looks like a string literal, or follows
//! a line that opened a block. The block flag is a single boolean: the first
//! line containing `}` clears it, even inside nested blocks.

use crate::diagnostic::{Diagnostic, ErrorKind};
use crate::scanner::QuoteState;
use crate::source::Source;

/// Stateful per-line checker; feed lines in order.
#[derive(Debug, Default, Clone)]
pub struct TerminationChecker {
    quotes: QuoteState,
    in_block: bool,
}

impl TerminationChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quotes: QuoteState::new(),
            in_block: false,
        }
    }

    /// Checks one line (without its `\n`) and advances the state.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingSemicolon`] when the line needs a terminator
    /// and does not have one.
    pub fn process_line(&mut self, line: &[u8]) -> Result<(), ErrorKind> {
        let line = trim_trailing_blanks(line);

        self.quotes.observe_line(line);

        let has_open = line.contains(&b'{');
        let has_close = line.contains(&b'}');
        if has_open {
            self.in_block = true;
        }
        if has_close {
            self.in_block = false;
        }

        if self.quotes.is_inside() || self.in_block || has_open || has_close {
            return Ok(());
        }

        match line.last() {
            None | Some(b';' | b'}') => Ok(()),
            Some(_) => Err(ErrorKind::MissingSemicolon),
        }
    }

    #[must_use]
    pub const fn in_block(&self) -> bool {
        self.in_block
    }

    #[must_use]
    pub const fn in_string(&self) -> bool {
        self.quotes.is_inside()
    }

    pub const fn reset(&mut self) {
        self.quotes.reset();
        self.in_block = false;
    }
}

/// Strips trailing spaces and tabs only.
///
/// A line made only of spaces and tabs is returned unchanged, so it still
/// ends in a blank and needs a terminator.
fn trim_trailing_blanks(line: &[u8]) -> &[u8] {
    match line.iter().rposition(|&b| b != b' ' && b != b'\t') {
        Some(pos) => &line[..=pos],
        None => line,
    }
}

/// Runs [`TerminationChecker`] over every line of `source`.
///
/// # Errors
///
/// Returns [`ErrorKind::MissingSemicolon`] with the 1-based number of the
/// first offending line.
pub fn check_semicolons(source: &Source<'_>) -> Result<(), Diagnostic> {
    let mut checker = TerminationChecker::new();
    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        if let Err(kind) = checker.process_line(line) {
            log::debug!("line {line_number} lacks a terminator");
            return Err(kind.at_line(line_number));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Result<(), Diagnostic> {
        check_semicolons(&Source::from(text))
    }

    #[test]
    fn terminated_lines_pass() {
        assert_eq!(check("int x = 5;\nint y = 10;\n"), Ok(()));
    }

    #[test]
    fn missing_terminator() {
        assert_eq!(
            check("int x = 5"),
            Err(ErrorKind::MissingSemicolon.at_line(1))
        );
        assert_eq!(
            check("int a;\n\nint x = 5\n"),
            Err(ErrorKind::MissingSemicolon.at_line(3))
        );
    }

    #[test]
    fn opening_brace_line_passes() {
        assert_eq!(check("if (x) {"), Ok(()));
    }

    #[test]
    fn block_body_is_not_checked() {
        assert_eq!(check("int main() {\n  return 0\n}\n"), Ok(()));
    }

    #[test]
    fn single_flag_closes_on_first_brace() {
        // The inner `}` clears the flag, so `bar()` is checked.
        assert_eq!(
            check("void f() {\n  if (a) {\n  }\n  bar()\n}\n"),
            Err(ErrorKind::MissingSemicolon.at_line(4))
        );
    }

    #[test]
    fn open_and_close_on_one_line_leaves_block() {
        assert_eq!(
            check("struct S { int a; };\nint x"),
            Err(ErrorKind::MissingSemicolon.at_line(2))
        );
    }

    #[test]
    fn trailing_blanks_are_trimmed() {
        assert_eq!(check("x = 1; \t \n"), Ok(()));
    }

    #[test]
    fn other_trailing_whitespace_is_kept() {
        assert_eq!(
            check("x = 1;\r\n"),
            Err(ErrorKind::MissingSemicolon.at_line(1))
        );
    }

    #[test]
    fn empty_lines_pass() {
        assert_eq!(check("a;\n\n\nb;\n"), Ok(()));
    }

    #[test]
    fn whitespace_only_line_is_not_trimmed_away() {
        assert_eq!(
            check("int x = 5;\n   \nint y = 6;\n"),
            Err(ErrorKind::MissingSemicolon.at_line(2))
        );
        assert_eq!(
            check("a;\n\t\n"),
            Err(ErrorKind::MissingSemicolon.at_line(2))
        );
    }

    #[test]
    fn whitespace_only_line_inside_block_passes() {
        assert_eq!(check("void f() {\n    \n}\n"), Ok(()));
    }

    #[test]
    fn brace_inside_string_still_opens_block() {
        // Brace detection ignores quotes, so line 3 is treated as block body.
        assert_eq!(check("x = 1;\nputs(\"{\");\ny\n"), Ok(()));
    }

    #[test]
    fn unterminated_string_suppresses_following_lines() {
        assert_eq!(check("s = \"abc\nstill text\nend\";"), Ok(()));
    }

    #[test]
    fn line_ending_in_brace_passes() {
        assert_eq!(check("}"), Ok(()));
    }

    #[test]
    fn reset_clears_state() {
        let mut checker = TerminationChecker::new();
        assert_eq!(checker.process_line(b"fn f() {"), Ok(()));
        assert!(checker.in_block());
        assert_eq!(checker.process_line(b"\"open"), Ok(()));
        assert!(checker.in_string());
        checker.reset();
        assert!(!checker.in_block());
        assert!(!checker.in_string());
        assert_eq!(
            checker.process_line(b"x"),
            Err(ErrorKind::MissingSemicolon)
        );
    }
}
