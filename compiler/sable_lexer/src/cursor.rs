//! Character cursor over the source text.
//!
//! Positions are absolute byte offsets into the whole text, so a lexer
//! started at a non-zero offset produces tokens positioned in the caller's
//! coordinate space.

use sable_ir::Span;

/// A copyable read position. Copies are snapshots.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, start: usize) -> Self {
        debug_assert!(text.is_char_boundary(start), "start must be a char boundary");
        Cursor { text, pos: start }
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        to_offset(self.pos)
    }

    #[inline]
    pub(crate) fn byte_pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Text from the cursor to the end.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Byte `n` positions ahead, `0` past the end.
    #[inline]
    pub(crate) fn byte_at(&self, n: usize) -> u8 {
        self.text.as_bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn current_byte(&self) -> u8 {
        self.byte_at(0)
    }

    #[inline]
    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advance one character.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance `n` bytes. `n` must land on a char boundary.
    #[inline]
    pub(crate) fn bump_bytes(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
        debug_assert!(self.text.is_char_boundary(self.pos));
    }

    /// Consume `prefix` if the text continues with it.
    #[inline]
    pub(crate) fn eat(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn eat_byte(&mut self, byte: u8) -> bool {
        if self.current_byte() == byte && !self.is_eof() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos - start
    }

    /// Count a run of `byte` starting at the cursor without consuming it.
    pub(crate) fn run_length(&self, byte: u8) -> usize {
        self.rest().bytes().take_while(|&b| b == byte).count()
    }

    /// Byte offset of the next `\r` or `\n`, or the end of the text.
    pub(crate) fn line_end(&self) -> usize {
        memchr::memchr2(b'\n', b'\r', self.rest().as_bytes())
            .map_or(self.text.len(), |i| self.pos + i)
    }

    /// Move to the next `\r` or `\n` (or the end of the text).
    pub(crate) fn skip_to_line_end(&mut self) {
        self.pos = self.line_end();
    }

    /// Width of the line break at the cursor (`\r\n` is 2), 0 if none.
    pub(crate) fn newline_width(&self) -> usize {
        match (self.byte_at(0), self.byte_at(1)) {
            (b'\r', b'\n') => 2,
            (b'\r' | b'\n', _) => 1,
            _ => 0,
        }
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Span from byte `start` to the cursor.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span::new(to_offset(start), self.pos())
    }
}

pub(crate) fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

pub(crate) fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Whitespace other than line breaks.
pub(crate) fn is_whitespace(c: char) -> bool {
    c != '\n' && c != '\r' && c.is_whitespace()
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

pub(crate) fn is_identifier_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
