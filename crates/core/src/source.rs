//! Read-only view over the text being checked.
//!
//! The checkers never decode the input: every token they care about is ASCII,
//! so the content is handled as raw bytes and any encoding passes through.

/// Full content of the input file, borrowed for the duration of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    bytes: &'a [u8],
}

impl<'a> Source<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 1-based line number of the byte at `offset`.
    ///
    /// Counts the `\n` bytes strictly before `offset`; offsets past the end are
    /// clamped to the end of the input.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        let end = offset.min(self.bytes.len());
        1 + bytecount::count(&self.bytes[..end], b'\n')
    }

    /// Newline-delimited lines, without their terminators.
    ///
    /// A trailing `\n` closes the last line rather than opening an empty one.
    /// Carriage returns are left in place.
    #[must_use]
    pub fn lines(&self) -> Lines<'a> {
        Lines {
            rest: Some(self.bytes),
        }
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Iterator returned by [`Source::lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        if rest.is_empty() {
            self.rest = None;
            return None;
        }
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                self.rest = Some(&rest[pos + 1..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn collect(text: &str) -> Vec<&[u8]> {
        Source::from(text).lines().collect()
    }

    #[test]
    fn lines_split_on_newline() {
        assert_eq!(collect("a\nb\nc"), [&b"a"[..], b"b", b"c"]);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(collect("a;\nb;\n"), [&b"a;"[..], b"b;"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(collect("a\n\n\nb"), [&b"a"[..], b"", b"", b"b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(collect("").len(), 0);
    }

    #[test]
    fn carriage_return_is_not_stripped() {
        assert_eq!(collect("x;\r\n"), [&b"x;\r"[..]]);
    }

    #[test]
    fn line_of_counts_preceding_newlines() {
        let src = Source::from("ab\ncd\n\nef");
        assert_eq!(src.line_of(0), 1);
        assert_eq!(src.line_of(2), 1);
        assert_eq!(src.line_of(3), 2);
        assert_eq!(src.line_of(7), 4);
        assert_eq!(src.line_of(1000), 4);
    }
}
