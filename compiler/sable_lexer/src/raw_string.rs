//! Raw string literals: `"""..."""`, optionally `$`-prefixed.
//!
//! A raw string whose closing quote run is on the opening line is
//! single-line. Otherwise it is multi-line: content starts on the line after
//! the opening delimiter, the closing delimiter sits alone on its line, and
//! the whitespace in front of the closing delimiter is removed from every
//! content line. Each content line is checked on its own against that
//! whitespace, so a mismatch is reported on the line where it occurs.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{Span, SyntaxKind};
use sable_options::Feature;

use crate::cursor::{is_whitespace, to_offset};
use crate::scanner::{Lexer, Scanned};

impl Lexer<'_> {
    /// Cursor on the first quote; `start` is the token start (before any `$`).
    pub(crate) fn raw_string(&mut self, start: usize, dollars: usize) -> Scanned {
        let quotes = self.cursor.run_length(b'"');
        self.cursor.bump_bytes(quotes);
        let line_end = self.cursor.line_end();
        let opening_rest = self.cursor.slice(self.cursor.byte_pos(), line_end);

        let (line_kind, value) = if find_quote_run(opening_rest, quotes).is_some() {
            (
                SyntaxKind::SingleLineRawStringLiteralToken,
                self.single_line_raw(start, quotes),
            )
        } else {
            (
                SyntaxKind::MultiLineRawStringLiteralToken,
                self.multi_line_raw(start, dollars + quotes, quotes),
            )
        };
        self.require_feature(Feature::RawStringLiterals, start);
        if dollars > 0 {
            Scanned::literal(SyntaxKind::InterpolatedRawStringToken, value)
        } else {
            Scanned::literal(line_kind, value)
        }
    }

    fn single_line_raw(&mut self, start: usize, quotes: usize) -> Option<String> {
        let content_start = self.cursor.byte_pos();
        let content_end = loop {
            if self.cursor.is_eof() {
                // A closing run exists on this line; this only guards the loop.
                break self.cursor.byte_pos();
            }
            if self.cursor.current_byte() == b'"' {
                let run = self.cursor.run_length(b'"');
                if run >= quotes {
                    let end = self.cursor.byte_pos();
                    self.close_run(run, quotes);
                    break end;
                }
                self.cursor.bump_bytes(run);
            } else {
                self.cursor.bump();
            }
        };
        let content = self.cursor.slice(content_start, content_end);
        if content.chars().all(is_whitespace) {
            let span = self.cursor.span_from(start);
            self.report(Diagnostic::new(ErrorCode::CS9001, span));
        }
        Some(content.to_string())
    }

    /// Consume a closing quote run, reporting a run longer than the opener.
    fn close_run(&mut self, run: usize, quotes: usize) {
        let run_start = self.cursor.byte_pos();
        self.cursor.bump_bytes(run);
        if run > quotes {
            let span = self.cursor.span_from(run_start);
            self.report(Diagnostic::new(ErrorCode::CS8998, span));
        }
    }

    fn multi_line_raw(
        &mut self,
        start: usize,
        delimiter_len: usize,
        quotes: usize,
    ) -> Option<String> {
        let opener = Span::new(to_offset(start), to_offset(start + delimiter_len));

        // Opening line must be blank after the delimiter.
        let line_end = self.cursor.line_end();
        let rest = self.cursor.slice(self.cursor.byte_pos(), line_end);
        if let Some(offset) = rest.find(|c: char| !is_whitespace(c)) {
            let from = self.cursor.byte_pos() + offset;
            let span = Span::new(to_offset(from), to_offset(line_end));
            self.report(Diagnostic::new(ErrorCode::CS9002, span));
        }
        self.cursor.skip_to_line_end();
        if self.cursor.is_eof() {
            self.report(Diagnostic::new(ErrorCode::CS8997, opener));
            return None;
        }
        self.end_of_line();

        let mut lines: Vec<(usize, usize)> = Vec::new();
        let closing_ws = loop {
            if self.cursor.is_eof() {
                self.report(Diagnostic::new(ErrorCode::CS8997, opener));
                return None;
            }
            let line_start = self.cursor.byte_pos();
            let line_end = self.cursor.line_end();
            let line = self.cursor.slice(line_start, line_end);
            if let Some(at) = find_quote_run(line, quotes) {
                let prefix = &line[..at];
                self.cursor.bump_bytes(at);
                let run = self.cursor.run_length(b'"');
                let run_start = self.cursor.byte_pos();
                self.close_run(run, quotes);
                if !prefix.chars().all(is_whitespace) {
                    let span = self.cursor.span_from(run_start);
                    self.report(Diagnostic::new(ErrorCode::CS9000, span));
                    return None;
                }
                break prefix;
            }
            lines.push((line_start, line_end));
            self.cursor.skip_to_line_end();
            self.end_of_line();
        };

        let mut value = String::new();
        for (i, &(line_start, line_end)) in lines.iter().enumerate() {
            let line = self.cursor.slice(line_start, line_end);
            if i > 0 {
                let previous_end = lines[i - 1].1;
                value.push_str(self.cursor.slice(previous_end, line_start));
            }
            if line.chars().all(is_whitespace) {
                continue;
            }
            self.check_indentation(line, line_start, closing_ws);
            let content = line
                .strip_prefix(closing_ws)
                .unwrap_or_else(|| line.trim_start_matches(is_whitespace));
            value.push_str(content);
        }
        Some(value)
    }

    /// Compare one content line's leading whitespace against the closing
    /// line's, reporting at most one diagnostic for the line.
    fn check_indentation(&mut self, line: &str, line_start: usize, closing_ws: &str) {
        let ws_len = line.len() - line.trim_start_matches(is_whitespace).len();
        let ws = &line[..ws_len];
        let span = Span::new(to_offset(line_start), to_offset(line_start + ws_len));
        let mut here = ws.chars();
        for expected in closing_ws.chars() {
            match here.next() {
                None => {
                    self.report(Diagnostic::new(ErrorCode::CS8999, span));
                    return;
                }
                Some(found) if found != expected => {
                    self.report(
                        Diagnostic::new(ErrorCode::CS9003, span)
                            .with_arg(escape_whitespace(found))
                            .with_arg(escape_whitespace(expected)),
                    );
                    return;
                }
                Some(_) => {}
            }
        }
    }
}

/// Byte offset of the first run of at least `len` quotes in `text`.
fn find_quote_run(text: &str, len: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            let run = bytes[i..].iter().take_while(|&&b| b == b'"').count();
            if run >= len {
                return Some(i);
            }
            i += run;
        } else {
            i += 1;
        }
    }
    None
}

/// Display form of a whitespace character in diagnostics.
pub(crate) fn escape_whitespace(c: char) -> String {
    match c {
        '\t' => "\\t".to_string(),
        '\u{b}' => "\\v".to_string(),
        '\u{c}' => "\\f".to_string(),
        c => format!("\\u{:04X}", u32::from(c)),
    }
}
