//! Double-quote tracking shared by both checks.
//!
//! The tracker only knows about `"`. There is no notion of comments, raw
//! strings or character literals, and escape handling is a single byte of
//! look-back: `\"` never toggles, even when the backslash is itself escaped
//! (`\\"`). Both checkers own a separate instance.

const QUOTE: u8 = b'"';
const BACKSLASH: u8 = b'\\';

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuoteState {
    inside: bool,
}

impl QuoteState {
    #[must_use]
    pub const fn new() -> Self {
        Self { inside: false }
    }

    /// `true` while the scanner believes it is inside a string literal.
    #[must_use]
    pub const fn is_inside(&self) -> bool {
        self.inside
    }

    pub const fn toggle(&mut self) {
        self.inside = !self.inside;
    }

    pub const fn reset(&mut self) {
        self.inside = false;
    }

    /// Feeds one byte of a character stream, `prev` being the byte before it.
    ///
    /// Returns whether the state flipped.
    pub const fn observe_escaped(&mut self, prev: Option<u8>, cur: u8) -> bool {
        if cur != QUOTE {
            return false;
        }
        if let Some(BACKSLASH) = prev {
            return false;
        }
        self.toggle();
        true
    }

    /// Feeds a whole line, flipping once per `"` with no escape handling.
    pub fn observe_line(&mut self, line: &[u8]) {
        let quotes = bytecount::count(line, QUOTE);
        if quotes % 2 == 1 {
            self.toggle();
        }
    }
}
