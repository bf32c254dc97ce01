//! Token assembly: leading trivia, token text, trailing trivia.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::SyntaxKind;
use sable_options::{Feature, ParseOptions};
use sable_syntax::{Token, TokenFlags, TriviaList};

use crate::cursor::{is_identifier_part, is_identifier_start, Cursor};
use crate::directive::DirectiveState;

/// What scanning one token produced, before trivia is attached.
pub(crate) struct Scanned {
    pub(crate) kind: SyntaxKind,
    pub(crate) contextual_kind: SyntaxKind,
    pub(crate) flags: TokenFlags,
    pub(crate) value: Option<String>,
}

impl Scanned {
    pub(crate) fn simple(kind: SyntaxKind) -> Self {
        Scanned {
            kind,
            contextual_kind: SyntaxKind::None,
            flags: TokenFlags::empty(),
            value: None,
        }
    }

    pub(crate) fn literal(kind: SyntaxKind, value: Option<String>) -> Self {
        Scanned {
            value,
            ..Scanned::simple(kind)
        }
    }
}

pub(crate) struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) options: &'a ParseOptions,
    pub(crate) directives: DirectiveState,
    /// Diagnostics for the token being assembled, trivia included.
    pub(crate) diagnostics: Vec<Diagnostic>,
    /// Has any token other than end-of-file been produced?
    pub(crate) seen_token: bool,
    /// Is everything since the last line break whitespace?
    pub(crate) line_blank: bool,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(text: &'a str, start: usize, options: &'a ParseOptions) -> Self {
        Lexer {
            cursor: Cursor::new(text, start),
            options,
            directives: DirectiveState::new(options),
            diagnostics: Vec::new(),
            seen_token: false,
            line_blank: true,
            done: false,
        }
    }

    /// Produce the next token. After end-of-file, returns `None`.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let full_start = self.cursor.pos();
        let leading = self.leading_trivia();
        let start = self.cursor.byte_pos();

        let (scanned, end, trailing) = if self.cursor.is_eof() {
            self.done = true;
            self.finish_directives();
            (Scanned::simple(SyntaxKind::EndOfFileToken), start, TriviaList::new())
        } else {
            let scanned = self.scan_token(start);
            let end = self.cursor.byte_pos();
            debug_assert!(end > start, "token scan made no progress");
            self.seen_token = true;
            self.line_blank = false;
            (scanned, end, self.trailing_trivia())
        };

        let text = self.cursor.slice(start, end);
        let mut token = Token::new(scanned.kind, text, full_start);
        token.contextual_kind = scanned.contextual_kind;
        token.flags = scanned.flags;
        token.value = scanned.value;
        token.leading = leading;
        token.trailing = trailing;
        token.diagnostics = std::mem::take(&mut self.diagnostics);
        tracing::trace!(kind = ?token.kind, span = %token.span(), "lexed token");
        Some(token)
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn require_feature(&mut self, feature: Feature, start: usize) {
        let span = self.cursor.span_from(start);
        if let Some(diagnostic) = self.options.check_feature(feature, span) {
            self.report(diagnostic);
        }
    }

    // ─── Dispatch ───────────────────────────────────────────────────────

    fn scan_token(&mut self, start: usize) -> Scanned {
        let c = self.cursor.current().unwrap_or('\0');
        match c {
            '"' if self.cursor.starts_with("\"\"\"") => self.raw_string(start, 0),
            '"' => self.string_literal(),
            '\'' => self.char_literal(),
            '@' => self.at_sign(start),
            '$' => self.dollar(start),
            '0'..='9' => self.number(),
            '.' if self.cursor.byte_at(1).is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(false),
            _ => match self.punctuation() {
                Some(kind) => Scanned::simple(kind),
                None => self.bad_character(start),
            },
        }
    }

    fn bad_character(&mut self, start: usize) -> Scanned {
        let c = self.cursor.bump().unwrap_or('\0');
        let span = self.cursor.span_from(start);
        self.report(Diagnostic::new(ErrorCode::CS1056, span).with_arg(c.to_string()));
        Scanned::simple(SyntaxKind::BadToken)
    }

    fn at_sign(&mut self, start: usize) -> Scanned {
        match self.cursor.byte_at(1) {
            b'"' => {
                self.cursor.bump_bytes(1);
                self.verbatim_string()
            }
            b'$' if self.cursor.byte_at(2) == b'"' => {
                self.cursor.bump_bytes(2);
                self.interpolated_string(start, true)
            }
            _ => {
                let mut lookahead = self.cursor;
                lookahead.bump_bytes(1);
                if lookahead.current().is_some_and(is_identifier_start) {
                    self.cursor.bump_bytes(1);
                    self.identifier(true)
                } else {
                    self.bad_character(start)
                }
            }
        }
    }

    fn dollar(&mut self, start: usize) -> Scanned {
        let dollars = self.cursor.run_length(b'$');
        let mut lookahead = self.cursor;
        lookahead.bump_bytes(dollars);
        if lookahead.starts_with("\"\"\"") {
            self.cursor.bump_bytes(dollars);
            return self.raw_string(start, dollars);
        }
        if dollars == 1 {
            if lookahead.starts_with("\"") {
                self.cursor.bump_bytes(1);
                return self.interpolated_string(start, false);
            }
            if lookahead.starts_with("@\"") {
                self.cursor.bump_bytes(2);
                return self.interpolated_string(start, true);
            }
        }
        self.bad_character(start)
    }

    // ─── Identifiers & keywords ─────────────────────────────────────────

    fn identifier(&mut self, verbatim: bool) -> Scanned {
        let name_start = self.cursor.byte_pos();
        self.cursor.eat_while(is_identifier_part);
        let name = self.cursor.slice(name_start, self.cursor.byte_pos());
        if verbatim {
            return Scanned {
                flags: TokenFlags::VERBATIM,
                value: Some(name.to_string()),
                ..Scanned::simple(SyntaxKind::IdentifierToken)
            };
        }
        if let Some(keyword) = SyntaxKind::keyword(name) {
            return Scanned::simple(keyword);
        }
        Scanned {
            contextual_kind: SyntaxKind::contextual_keyword(name).unwrap_or(SyntaxKind::None),
            ..Scanned::simple(SyntaxKind::IdentifierToken)
        }
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self) -> Scanned {
        let start = self.cursor.byte_pos();
        let radix_prefix = match (self.cursor.byte_at(0), self.cursor.byte_at(1)) {
            (b'0', b'x' | b'X') => Some(16),
            (b'0', b'b' | b'B') => Some(2),
            _ => None,
        };
        let mut valid = true;
        if let Some(radix) = radix_prefix {
            self.cursor.bump_bytes(2);
            let digits = self.cursor.eat_while(|c| c == '_' || c.is_digit(radix));
            valid = digits > 0;
            self.integer_suffix();
        } else {
            self.cursor.eat_while(|c| c == '_' || c.is_ascii_digit());
            let mut real = false;
            if self.cursor.current_byte() == b'.' && self.cursor.byte_at(1).is_ascii_digit() {
                self.cursor.bump_bytes(1);
                self.cursor.eat_while(|c| c == '_' || c.is_ascii_digit());
                real = true;
            }
            if matches!(self.cursor.current_byte(), b'e' | b'E') {
                let sign = usize::from(matches!(self.cursor.byte_at(1), b'+' | b'-'));
                if self.cursor.byte_at(1 + sign).is_ascii_digit() {
                    self.cursor.bump_bytes(1 + sign);
                    self.cursor.eat_while(|c| c.is_ascii_digit());
                    real = true;
                } else {
                    self.cursor.bump_bytes(1 + sign);
                    valid = false;
                }
            }
            if matches!(
                self.cursor.current_byte(),
                b'f' | b'F' | b'd' | b'D' | b'm' | b'M'
            ) {
                self.cursor.bump_bytes(1);
            } else if !real {
                self.integer_suffix();
            }
        }
        // A number running straight into an identifier character is malformed.
        if self.cursor.current().is_some_and(is_identifier_part) {
            self.cursor.eat_while(is_identifier_part);
            valid = false;
        }
        if !valid {
            let span = self.cursor.span_from(start);
            self.report(Diagnostic::new(ErrorCode::CS1013, span));
        }
        Scanned::simple(SyntaxKind::NumericLiteralToken)
    }

    fn integer_suffix(&mut self) {
        match (
            self.cursor.current_byte().to_ascii_lowercase(),
            self.cursor.byte_at(1).to_ascii_lowercase(),
        ) {
            (b'u', b'l') | (b'l', b'u') => self.cursor.bump_bytes(2),
            (b'u' | b'l', _) => self.cursor.bump_bytes(1),
            _ => {}
        }
    }

    // ─── Punctuation ────────────────────────────────────────────────────

    /// Longest-match punctuation. `>` is only ever lexed alone or as `>=`;
    /// the parser joins adjacent `>` tokens into shift operators so that
    /// nested generic argument lists close naturally.
    fn punctuation(&mut self) -> Option<SyntaxKind> {
        use SyntaxKind as K;
        let (b0, b1, b2) = (
            self.cursor.byte_at(0),
            self.cursor.byte_at(1),
            self.cursor.byte_at(2),
        );
        let (kind, len) = match (b0, b1, b2) {
            (b'?', b'?', b'=') => (K::QuestionQuestionEqualsToken, 3),
            (b'<', b'<', b'=') => (K::LessThanLessThanEqualsToken, 3),
            (b'.', b'.', _) => (K::DotDotToken, 2),
            (b'?', b'?', _) => (K::QuestionQuestionToken, 2),
            (b'<', b'<', _) => (K::LessThanLessThanToken, 2),
            (b'|', b'|', _) => (K::BarBarToken, 2),
            (b'&', b'&', _) => (K::AmpersandAmpersandToken, 2),
            (b'-', b'-', _) => (K::MinusMinusToken, 2),
            (b'+', b'+', _) => (K::PlusPlusToken, 2),
            (b':', b':', _) => (K::ColonColonToken, 2),
            (b'-', b'>', _) => (K::MinusGreaterThanToken, 2),
            (b'!', b'=', _) => (K::ExclamationEqualsToken, 2),
            (b'=', b'=', _) => (K::EqualsEqualsToken, 2),
            (b'=', b'>', _) => (K::EqualsGreaterThanToken, 2),
            (b'<', b'=', _) => (K::LessThanEqualsToken, 2),
            (b'>', b'=', _) => (K::GreaterThanEqualsToken, 2),
            (b'/', b'=', _) => (K::SlashEqualsToken, 2),
            (b'*', b'=', _) => (K::AsteriskEqualsToken, 2),
            (b'|', b'=', _) => (K::BarEqualsToken, 2),
            (b'&', b'=', _) => (K::AmpersandEqualsToken, 2),
            (b'+', b'=', _) => (K::PlusEqualsToken, 2),
            (b'-', b'=', _) => (K::MinusEqualsToken, 2),
            (b'^', b'=', _) => (K::CaretEqualsToken, 2),
            (b'%', b'=', _) => (K::PercentEqualsToken, 2),
            (b'~', _, _) => (K::TildeToken, 1),
            (b'!', _, _) => (K::ExclamationToken, 1),
            (b'%', _, _) => (K::PercentToken, 1),
            (b'^', _, _) => (K::CaretToken, 1),
            (b'&', _, _) => (K::AmpersandToken, 1),
            (b'*', _, _) => (K::AsteriskToken, 1),
            (b'(', _, _) => (K::OpenParenToken, 1),
            (b')', _, _) => (K::CloseParenToken, 1),
            (b'-', _, _) => (K::MinusToken, 1),
            (b'+', _, _) => (K::PlusToken, 1),
            (b'=', _, _) => (K::EqualsToken, 1),
            (b'{', _, _) => (K::OpenBraceToken, 1),
            (b'}', _, _) => (K::CloseBraceToken, 1),
            (b'[', _, _) => (K::OpenBracketToken, 1),
            (b']', _, _) => (K::CloseBracketToken, 1),
            (b'|', _, _) => (K::BarToken, 1),
            (b':', _, _) => (K::ColonToken, 1),
            (b';', _, _) => (K::SemicolonToken, 1),
            (b'<', _, _) => (K::LessThanToken, 1),
            (b',', _, _) => (K::CommaToken, 1),
            (b'>', _, _) => (K::GreaterThanToken, 1),
            (b'.', _, _) => (K::DotToken, 1),
            (b'?', _, _) => (K::QuestionToken, 1),
            (b'/', _, _) => (K::SlashToken, 1),
            _ => return None,
        };
        let start = self.cursor.byte_pos();
        self.cursor.bump_bytes(len);
        if kind == K::DotDotToken && self.cursor.current_byte() == b'.' {
            // `...` is not an operator: keep `..` and leave the third dot
            // to start the next token.
            let span = self.cursor.span_from(start);
            self.report(Diagnostic::new(ErrorCode::CS8635, span));
        }
        Some(kind)
    }
}
