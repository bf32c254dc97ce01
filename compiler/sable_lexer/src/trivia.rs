//! Whitespace, line breaks, comments, directives and disabled text.
//!
//! Trailing trivia stops after the first line break; everything after it
//! belongs to the next token's leading trivia. Directives only ever appear
//! in leading trivia because they must start a line.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::SyntaxKind;
use sable_syntax::{Trivia, TriviaList};

use crate::cursor::{is_newline, is_whitespace};
use crate::scanner::Lexer;

impl Lexer<'_> {
    pub(crate) fn leading_trivia(&mut self) -> TriviaList {
        let mut list = TriviaList::new();
        loop {
            let start = self.cursor.byte_pos();
            let kind = match self.cursor.current() {
                Some(c) if is_newline(c) => {
                    self.end_of_line();
                    self.line_blank = true;
                    SyntaxKind::EndOfLineTrivia
                }
                Some(c) if is_whitespace(c) => {
                    self.cursor.eat_while(is_whitespace);
                    SyntaxKind::WhitespaceTrivia
                }
                Some('/') if matches!(self.cursor.byte_at(1), b'/' | b'*') => {
                    self.line_blank = false;
                    self.comment()
                }
                Some('#') => {
                    let at_line_start = self.line_blank;
                    self.line_blank = false;
                    self.directive(at_line_start, &mut list);
                    continue;
                }
                _ => break,
            };
            self.push(&mut list, kind, start);
        }
        list
    }

    pub(crate) fn trailing_trivia(&mut self) -> TriviaList {
        let mut list = TriviaList::new();
        loop {
            let start = self.cursor.byte_pos();
            match self.cursor.current() {
                Some(c) if is_newline(c) => {
                    self.end_of_line();
                    self.line_blank = true;
                    self.push(&mut list, SyntaxKind::EndOfLineTrivia, start);
                    break;
                }
                Some(c) if is_whitespace(c) => {
                    self.cursor.eat_while(is_whitespace);
                    self.push(&mut list, SyntaxKind::WhitespaceTrivia, start);
                }
                Some('/') if matches!(self.cursor.byte_at(1), b'/' | b'*') => {
                    let kind = self.comment();
                    self.push(&mut list, kind, start);
                }
                _ => break,
            }
        }
        list
    }

    pub(crate) fn push(&mut self, list: &mut TriviaList, kind: SyntaxKind, start: usize) {
        let text = self.cursor.slice(start, self.cursor.byte_pos());
        if !text.is_empty() {
            list.push(Trivia::new(kind, text));
        }
    }

    /// Consume one line break (`\r\n` counts as one).
    pub(crate) fn end_of_line(&mut self) {
        let width = self.cursor.newline_width();
        self.cursor.bump_bytes(width);
    }

    fn comment(&mut self) -> SyntaxKind {
        let start = self.cursor.byte_pos();
        let docs = self.options.documentation_mode().parses_doc_comments();
        if self.cursor.byte_at(1) == b'/' {
            let is_doc = self.cursor.starts_with("///") && self.cursor.byte_at(3) != b'/';
            self.cursor.skip_to_line_end();
            return if is_doc && docs {
                SyntaxKind::SingleLineDocumentationCommentTrivia
            } else {
                SyntaxKind::SingleLineCommentTrivia
            };
        }

        let is_doc = self.cursor.starts_with("/**") && !self.cursor.starts_with("/**/");
        self.cursor.bump_bytes(2);
        match memchr::memmem::find(self.cursor.rest().as_bytes(), b"*/") {
            Some(end) => self.cursor.bump_bytes(end + 2),
            None => {
                self.cursor.bump_bytes(self.cursor.rest().len());
                let span = self.cursor.span_from(start);
                self.report(Diagnostic::new(ErrorCode::CS1035, span));
            }
        }
        if is_doc && docs {
            SyntaxKind::MultiLineDocumentationCommentTrivia
        } else {
            SyntaxKind::MultiLineCommentTrivia
        }
    }

    /// Consume lines excluded by a false conditional, stopping before the
    /// next line that holds a conditional directive.
    pub(crate) fn disabled_text(&mut self, list: &mut TriviaList) {
        let start = self.cursor.byte_pos();
        while !self.cursor.is_eof() {
            let mut lookahead = self.cursor;
            lookahead.eat_while(is_whitespace);
            if lookahead.current_byte() == b'#' && crate::directive::is_conditional(lookahead.rest()) {
                break;
            }
            self.cursor.skip_to_line_end();
            self.end_of_line();
        }
        self.push(list, SyntaxKind::DisabledTextTrivia, start);
        self.line_blank = true;
    }
}
