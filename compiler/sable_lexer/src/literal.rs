//! Quoted literals: strings, verbatim strings, interpolated strings and
//! character literals.
//!
//! Interpolated strings are a single token; the lexer only balances the
//! holes so that nested quotes and braces do not end the literal early.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::SyntaxKind;
use sable_options::Feature;

use crate::cursor::is_newline;
use crate::scanner::{Lexer, Scanned};

impl Lexer<'_> {
    /// `"..."`, optionally followed by a `u8` suffix.
    pub(crate) fn string_literal(&mut self) -> Scanned {
        let start = self.cursor.byte_pos();
        self.cursor.bump_bytes(1);
        let mut value = String::new();
        loop {
            match self.cursor.current() {
                None => {
                    let span = self.cursor.span_from(start);
                    self.report(Diagnostic::new(ErrorCode::CS1010, span));
                    break;
                }
                Some(c) if is_newline(c) => {
                    let span = self.cursor.span_from(start);
                    self.report(Diagnostic::new(ErrorCode::CS1010, span));
                    break;
                }
                Some('"') => {
                    self.cursor.bump_bytes(1);
                    break;
                }
                Some('\\') => self.escape(&mut value),
                Some(c) => {
                    self.cursor.bump();
                    value.push(c);
                }
            }
        }
        if self.cursor.eat("u8") || self.cursor.eat("U8") {
            self.require_feature(Feature::Utf8StringLiterals, start);
            return Scanned::literal(SyntaxKind::Utf8StringLiteralToken, Some(value));
        }
        Scanned::literal(SyntaxKind::StringLiteralToken, Some(value))
    }

    /// `@"..."` with the cursor on the opening quote.
    pub(crate) fn verbatim_string(&mut self) -> Scanned {
        let start = self.cursor.byte_pos().saturating_sub(1);
        self.cursor.bump_bytes(1);
        let mut value = String::new();
        loop {
            match self.cursor.bump() {
                None => {
                    let span = self.cursor.span_from(start);
                    self.report(Diagnostic::new(ErrorCode::CS1039, span));
                    break;
                }
                Some('"') if self.cursor.eat_byte(b'"') => value.push('"'),
                Some('"') => break,
                Some(c) => value.push(c),
            }
        }
        if self.cursor.eat("u8") || self.cursor.eat("U8") {
            self.require_feature(Feature::Utf8StringLiterals, start);
            return Scanned::literal(SyntaxKind::Utf8StringLiteralToken, Some(value));
        }
        Scanned::literal(SyntaxKind::StringLiteralToken, Some(value))
    }

    /// `$"..."` or `$@"..."`, cursor on the opening quote.
    pub(crate) fn interpolated_string(&mut self, start: usize, verbatim: bool) -> Scanned {
        self.cursor.bump_bytes(1);
        loop {
            match self.cursor.current() {
                None => {
                    let code = if verbatim {
                        ErrorCode::CS1039
                    } else {
                        ErrorCode::CS1010
                    };
                    let span = self.cursor.span_from(start);
                    self.report(Diagnostic::new(code, span));
                    break;
                }
                Some(c) if is_newline(c) && !verbatim => {
                    let span = self.cursor.span_from(start);
                    self.report(Diagnostic::new(ErrorCode::CS1010, span));
                    break;
                }
                Some('"') => {
                    self.cursor.bump_bytes(1);
                    if !(verbatim && self.cursor.eat_byte(b'"')) {
                        break;
                    }
                }
                Some('\\') if !verbatim => {
                    self.cursor.bump_bytes(1);
                    self.cursor.bump();
                }
                Some('{') if self.cursor.byte_at(1) == b'{' => self.cursor.bump_bytes(2),
                Some('}') if self.cursor.byte_at(1) == b'}' => self.cursor.bump_bytes(2),
                Some('{') => {
                    self.cursor.bump_bytes(1);
                    self.interpolation_hole();
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
        Scanned::simple(SyntaxKind::InterpolatedStringToken)
    }

    /// Skip an interpolation hole up to and including its closing `}`.
    fn interpolation_hole(&mut self) {
        let mut depth = 0usize;
        loop {
            let hole_start = self.cursor.byte_pos();
            match self.cursor.current() {
                None => return,
                Some('}') if depth == 0 => {
                    self.cursor.bump_bytes(1);
                    return;
                }
                Some('{' | '(' | '[') => {
                    depth += 1;
                    self.cursor.bump_bytes(1);
                }
                Some('}' | ')' | ']') => {
                    depth = depth.saturating_sub(1);
                    self.cursor.bump_bytes(1);
                }
                Some('"') if self.cursor.starts_with("\"\"\"") => {
                    self.raw_string(hole_start, 0);
                }
                Some('"') => {
                    self.string_literal();
                }
                Some('\'') => {
                    self.char_literal();
                }
                Some('@') if self.cursor.byte_at(1) == b'"' => {
                    self.cursor.bump_bytes(1);
                    self.verbatim_string();
                }
                Some('$') if self.cursor.byte_at(1) == b'"' => {
                    self.cursor.bump_bytes(1);
                    self.interpolated_string(hole_start, false);
                }
                Some('$' | '@')
                    if matches!(
                        (self.cursor.byte_at(1), self.cursor.byte_at(2)),
                        (b'@' | b'$', b'"')
                    ) =>
                {
                    self.cursor.bump_bytes(2);
                    self.interpolated_string(hole_start, true);
                }
                Some('/') if self.cursor.byte_at(1) == b'*' => {
                    match memchr::memmem::find(self.cursor.rest().as_bytes(), b"*/") {
                        Some(end) => self.cursor.bump_bytes(end + 2),
                        None => self.cursor.bump_bytes(self.cursor.rest().len()),
                    }
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }

    /// `'x'` and escaped forms.
    pub(crate) fn char_literal(&mut self) -> Scanned {
        let start = self.cursor.byte_pos();
        self.cursor.bump_bytes(1);
        let mut value = String::new();
        let mut count = 0usize;
        loop {
            match self.cursor.current() {
                None => {
                    let span = self.cursor.span_from(start);
                    self.report(Diagnostic::new(ErrorCode::CS1010, span));
                    return Scanned::literal(SyntaxKind::CharacterLiteralToken, Some(value));
                }
                Some(c) if is_newline(c) => {
                    let span = self.cursor.span_from(start);
                    self.report(Diagnostic::new(ErrorCode::CS1010, span));
                    return Scanned::literal(SyntaxKind::CharacterLiteralToken, Some(value));
                }
                Some('\'') => {
                    self.cursor.bump_bytes(1);
                    break;
                }
                Some('\\') => {
                    self.escape(&mut value);
                    count += 1;
                }
                Some(c) => {
                    self.cursor.bump();
                    value.push(c);
                    count += 1;
                }
            }
        }
        let span = self.cursor.span_from(start);
        match count {
            0 => self.report(Diagnostic::new(ErrorCode::CS1011, span)),
            1 => {}
            _ => self.report(Diagnostic::new(ErrorCode::CS1012, span)),
        }
        Scanned::literal(SyntaxKind::CharacterLiteralToken, Some(value))
    }

    /// Decode one escape sequence (cursor on the backslash) into `value`.
    fn escape(&mut self, value: &mut String) {
        let start = self.cursor.byte_pos();
        self.cursor.bump_bytes(1);
        let decoded = match self.cursor.bump() {
            Some('\'') => Some('\''),
            Some('"') => Some('"'),
            Some('\\') => Some('\\'),
            Some('0') => Some('\0'),
            Some('a') => Some('\u{7}'),
            Some('b') => Some('\u{8}'),
            Some('f') => Some('\u{c}'),
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('t') => Some('\t'),
            Some('v') => Some('\u{b}'),
            Some('e') => Some('\u{1b}'),
            Some('u') => self.hex_escape(4, 4),
            Some('U') => self.hex_escape(8, 8),
            Some('x') => self.hex_escape(1, 4),
            _ => None,
        };
        match decoded {
            Some(c) => value.push(c),
            None => {
                value.push_str(self.cursor.slice(start, self.cursor.byte_pos()));
                let span = self.cursor.span_from(start);
                self.report(Diagnostic::new(ErrorCode::CS1009, span));
            }
        }
    }

    fn hex_escape(&mut self, min: usize, max: usize) -> Option<char> {
        let digits = self
            .cursor
            .rest()
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_hexdigit)
            .count();
        if digits < min {
            return None;
        }
        let text = self.cursor.slice(self.cursor.byte_pos(), self.cursor.byte_pos() + digits);
        self.cursor.bump_bytes(digits);
        u32::from_str_radix(text, 16).ok().and_then(char::from_u32)
    }
}
