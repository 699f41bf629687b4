use memchr::{memchr2, memchr_iter, memrchr};

use crate::error::Location;

/// Read position over one input buffer. Lives for a single parse call.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn location(&self) -> Location {
        Location {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn byte_position(&self) -> usize {
        self.position
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Text consumed since `start`, a value previously taken from `byte_position`.
    pub(crate) fn consumed_since(&self, start: usize) -> &'a str {
        &self.input[start..self.position]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        let bytes = self.input.as_bytes();
        match bytes.get(self.position) {
            Some(&byte) if byte.is_ascii() => Some(byte as char),
            Some(_) => self.input[self.position..].chars().next(),
            None => None,
        }
    }

    /// Consume one character. At end of input nothing moves and `None` comes back.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let bytes = self.input.as_bytes();
        let ch = match bytes.get(self.position) {
            Some(&byte) if byte.is_ascii() => {
                self.position += 1;
                byte as char
            }
            Some(_) => {
                let ch = self.input[self.position..].chars().next()?;
                self.position += ch.len_utf8();
                ch
            }
            None => return None,
        };
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }

    pub(crate) fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Consume everything up to (not including) the next `a` or `b` byte, or to
    /// the end of input. Both bytes must be ASCII so the split lands on a char
    /// boundary.
    pub(crate) fn take_until2(&mut self, a: u8, b: u8) -> &'a str {
        debug_assert!(a.is_ascii() && b.is_ascii());
        let input = self.input;
        let rest = &input.as_bytes()[self.position..];
        let len = memchr2(a, b, rest).unwrap_or(rest.len());
        let chunk = &input[self.position..self.position + len];
        self.bump_over(chunk);
        chunk
    }

    fn bump_over(&mut self, chunk: &str) {
        let bytes = chunk.as_bytes();
        let chars = if bytes.is_ascii() {
            bytes.len()
        } else {
            chunk.chars().count()
        };
        let newlines = memchr_iter(b'\n', bytes).count();
        if newlines > 0 {
            let tail_start = memrchr(b'\n', bytes).map_or(0, |idx| idx + 1);
            self.line += newlines;
            self.column = 1 + chunk[tail_start..].chars().count();
        } else {
            self.column += chars;
        }
        self.offset += chars;
        self.position += bytes.len();
    }
}
