//! Byte cursor over the source text.
//!
//! Every token boundary the lexer produces falls on an ASCII byte, so slices
//! taken between two cursor positions are always valid `str` slices. The one
//! place a multi-byte scalar can start a token (an unrecognized character) is
//! consumed whole through [`Cursor::advance_char`].

use memchr::{memchr, memchr2};

#[derive(Clone, Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_at(1)
    }

    #[inline]
    pub(crate) fn peek_at(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + n).copied()
    }

    /// The byte immediately before the cursor.
    #[inline]
    pub(crate) fn prev(&self) -> Option<u8> {
        let index = self.pos.checked_sub(1)?;
        self.source.as_bytes().get(index).copied()
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Consume one full UTF-8 scalar.
    pub(crate) fn advance_char(&mut self) -> Option<char> {
        let c = self.source.get(self.pos..)?.chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.current() == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(|b| b.is_ascii_whitespace());
    }

    /// Move to the next `\n` (not consumed) or end of input.
    pub(crate) fn skip_to_line_end(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        self.pos = memchr(b'\n', rest).map_or(self.source.len(), |i| self.pos + i);
    }

    /// Move to the next `"` or `\` (not consumed) or end of input.
    pub(crate) fn skip_string_content(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        self.pos = memchr2(b'"', b'\\', rest).map_or(self.source.len(), |i| self.pos + i);
    }

    /// Source text from `start` to the cursor.
    #[inline]
    pub(crate) fn slice(&self, start: usize) -> &'src str {
        self.source.get(start..self.pos).unwrap_or("")
    }
}
