//! Byte cursor shared by the scanning helpers.

use crate::lexer::span::ByteOffset;

/// Byte-position cursor over input text.
///
/// The cursor only ever stops on UTF-8 character boundaries: single-byte
/// moves are used for ASCII syntax and [`Cursor::advance_char`] for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: usize,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self { offset: 0 }
    }

    pub(crate) fn offset(&self) -> ByteOffset {
        ByteOffset::from_usize(self.offset)
    }

    pub(crate) fn position(&self) -> usize {
        self.offset
    }

    pub(crate) fn is_eof(&self, input: &str) -> bool {
        self.offset >= input.len()
    }

    pub(crate) fn peek_byte(&self, input: &str) -> Option<u8> {
        self.peek_at(input, 0)
    }

    /// Returns the byte `n` positions ahead of the cursor.
    pub(crate) fn peek_at(&self, input: &str, n: usize) -> Option<u8> {
        input.as_bytes().get(self.offset.saturating_add(n)).copied()
    }

    /// Advances the cursor by `count` bytes, clamped to input length.
    pub(crate) fn advance_by(&mut self, count: usize, input: &str) {
        self.offset = self.offset.saturating_add(count).min(input.len());
    }

    /// Consumes one full character and returns it.
    pub(crate) fn advance_char(&mut self, input: &str) -> Option<char> {
        let ch = input.get(self.offset..)?.chars().next()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }
}
