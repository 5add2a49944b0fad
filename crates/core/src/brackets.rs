//! Bracket balance over the whole input.
//!
//! `()`, `{}` and `[]` must nest and match outside of double-quoted strings.
//! Strings are allowed to run across newlines.

use alloc::vec::Vec;

use crate::diagnostic::{Diagnostic, ErrorKind};
use crate::scanner::QuoteState;
use crate::source::Source;

#[must_use]
pub const fn is_opener(b: u8) -> bool {
    matches!(b, b'(' | b'{' | b'[')
}

#[must_use]
pub const fn is_closer(b: u8) -> bool {
    matches!(b, b')' | b'}' | b']')
}

/// Closing counterpart of an opener.
#[must_use]
pub const fn closer_for(opener: u8) -> Option<u8> {
    match opener {
        b'(' => Some(b')'),
        b'{' => Some(b'}'),
        b'[' => Some(b']'),
        _ => None,
    }
}

/// Verifies bracket nesting, stopping at the first problem.
///
/// # Errors
///
/// * [`ErrorKind::UnmatchedClosingBracket`] when a closer has no opener.
/// * [`ErrorKind::MismatchedBrackets`] when a closer does not match the
///   innermost opener.
/// * [`ErrorKind::UnmatchedOpeningBracket`] at line `0` when openers remain at
///   end of input.
pub fn check_brackets(source: &Source<'_>) -> Result<(), Diagnostic> {
    let bytes = source.as_bytes();
    let mut stack: Vec<u8> = Vec::new();
    let mut quotes = QuoteState::new();
    let mut prev = None;

    for (offset, &b) in bytes.iter().enumerate() {
        quotes.observe_escaped(prev, b);
        prev = Some(b);

        if quotes.is_inside() {
            continue;
        }

        if is_opener(b) {
            stack.push(b);
        } else if is_closer(b) {
            let Some(opener) = stack.pop() else {
                let line = source.line_of(offset);
                log::debug!("unmatched '{}' at byte {offset}", char::from(b));
                return Err(ErrorKind::UnmatchedClosingBracket.at_line(line));
            };
            if closer_for(opener) != Some(b) {
                let line = source.line_of(offset);
                log::debug!(
                    "'{}' closes '{}' at byte {offset}",
                    char::from(b),
                    char::from(opener)
                );
                return Err(ErrorKind::MismatchedBrackets.at_line(line));
            }
        }
    }

    if !stack.is_empty() {
        log::debug!("{} bracket(s) left open at end of input", stack.len());
        return Err(ErrorKind::UnmatchedOpeningBracket.at_line(0));
    }

    Ok(())
}
