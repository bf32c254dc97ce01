//! Parser state shared by every production.
//!
//! The parser owns nothing but a cursor over the lexer's tokens, the
//! diagnostic bag and a little recovery bookkeeping. Productions consume
//! tokens by cloning them into the nodes they build.

use sable_diagnostic::{Diagnostic, DiagnosticBag, ErrorCode};
use sable_ir::{Span, SyntaxKind};
use sable_options::{Feature, ParseOptions};
use sable_syntax::{SyntaxNode, Token, TokenFlags};

use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::recovery::{RecoveryState, TokenSet};

use SyntaxKind as K;

/// Recursive descent parser over one token stream.
pub(crate) struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    options: &'a ParseOptions,
    pub(crate) diagnostics: DiagnosticBag,
    pub(crate) context: ParseContext,
    pub(crate) recovery: RecoveryState,
    /// Position and code of the last reported syntax error, used to avoid
    /// reporting the same complaint twice at one place.
    pub(crate) last_error: Option<(usize, ErrorCode)>,
    /// Drop every diagnostic instead of collecting it.
    quiet: bool,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token], options: &'a ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            options,
            diagnostics: DiagnosticBag::new(),
            context: ParseContext::NONE,
            recovery: RecoveryState::Matching,
            last_error: None,
            quiet: false,
        }
    }

    /// A parser that never reports, for documentation-comment references.
    pub(crate) fn quiet(tokens: &'a [Token], options: &'a ParseOptions) -> Self {
        Parser {
            quiet: true,
            ..Parser::new(tokens, options)
        }
    }

    pub(crate) fn options(&self) -> &'a ParseOptions {
        self.options
    }

    // ─── Token access ───────────────────────────────────────────────────

    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    pub(crate) fn kind(&self) -> SyntaxKind {
        self.cursor.current_kind()
    }

    /// Kind of the token `n` places ahead.
    #[inline]
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.cursor.peek_kind(n)
    }

    #[inline]
    pub(crate) fn nth_token(&self, n: usize) -> &'a Token {
        self.cursor.peek(n)
    }

    #[inline]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    pub(crate) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.kind())
    }

    /// Is the current token an identifier spelled as contextual keyword `kw`?
    #[inline]
    pub(crate) fn at_contextual(&self, kw: SyntaxKind) -> bool {
        self.current().is_contextual(kw)
    }

    #[inline]
    pub(crate) fn nth_contextual(&self, n: usize, kw: SyntaxKind) -> bool {
        self.nth_token(n).is_contextual(kw)
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Full start of the current token; where missing tokens are placed.
    #[inline]
    pub(crate) fn current_full_start(&self) -> u32 {
        self.current().full_start
    }

    // ─── Consuming ──────────────────────────────────────────────────────

    /// Consume the current token.
    pub(crate) fn bump(&mut self) -> Token {
        self.recovery = RecoveryState::Matching;
        self.cursor.advance().clone()
    }

    /// Consume the current identifier as the contextual keyword `kind`.
    pub(crate) fn bump_as(&mut self, kind: SyntaxKind) -> Token {
        let mut token = self.bump();
        debug_assert!(
            token.kind == K::IdentifierToken,
            "only identifiers are re-kinded"
        );
        token.kind = kind;
        token.contextual_kind = K::None;
        token
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> Option<Token> {
        self.at(kind).then(|| self.bump())
    }

    pub(crate) fn eat_contextual(&mut self, kw: SyntaxKind) -> Option<Token> {
        self.at_contextual(kw).then(|| self.bump_as(kw))
    }

    /// A zero-width placeholder at the current position.
    pub(crate) fn missing(&self, kind: SyntaxKind) -> Token {
        Token::missing(kind, self.current_full_start())
    }

    /// Consume `kind`, or report it missing and synthesise it.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> Token {
        if self.at(kind) {
            return self.bump();
        }
        self.report_expected(kind);
        self.missing(kind)
    }

    /// Consume contextual keyword `kw`, or report it missing and synthesise it.
    pub(crate) fn expect_contextual(&mut self, kw: SyntaxKind) -> Token {
        if self.at_contextual(kw) {
            return self.bump_as(kw);
        }
        self.report_expected(kw);
        self.missing(kw)
    }

    /// Consume an identifier (contextual keywords included).
    pub(crate) fn expect_identifier(&mut self) -> Token {
        if self.at(K::IdentifierToken) {
            return self.bump();
        }
        self.report_expected(K::IdentifierToken);
        self.missing(K::IdentifierToken)
    }

    /// The operator at the cursor, joining adjacent `>` tokens into shift
    /// operators. Returns the operator kind and how many tokens it spans.
    pub(crate) fn peek_operator(&self) -> (SyntaxKind, usize) {
        let kind = self.kind();
        if kind != K::GreaterThanToken || !self.cursor.is_adjacent(0) {
            return (kind, 1);
        }
        match self.nth(1) {
            K::GreaterThanEqualsToken => (K::GreaterThanGreaterThanEqualsToken, 2),
            K::GreaterThanToken if self.cursor.is_adjacent(1) => match self.nth(2) {
                K::GreaterThanToken => (K::GreaterThanGreaterThanGreaterThanToken, 3),
                K::GreaterThanEqualsToken => (K::GreaterThanGreaterThanGreaterThanEqualsToken, 3),
                _ => (K::GreaterThanGreaterThanToken, 2),
            },
            K::GreaterThanToken => (K::GreaterThanGreaterThanToken, 2),
            _ => (kind, 1),
        }
    }

    /// Consume an operator found by [`Parser::peek_operator`]. Joined tokens
    /// keep the first token's leading and the last token's trailing trivia.
    pub(crate) fn bump_operator(&mut self, kind: SyntaxKind, count: usize) -> Token {
        let mut token = self.bump();
        if count == 1 {
            return token;
        }
        for _ in 1..count {
            let next = self.bump();
            token.text.push_str(&next.text);
            token.trailing = next.trailing;
            token.diagnostics.extend(next.diagnostics);
        }
        token.kind = kind;
        token.flags |= TokenFlags::JOINED;
        token
    }

    // ─── Diagnostics ────────────────────────────────────────────────────

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        if self.quiet {
            return;
        }
        self.diagnostics.report(diagnostic);
    }

    /// Report a syntax error unless the same error was already reported
    /// at the current position.
    pub(crate) fn report_error(&mut self, diagnostic: Diagnostic) {
        let here = (self.position(), diagnostic.code);
        if self.recovery.is_recovering() && self.last_error == Some(here) {
            return;
        }
        self.recovery = RecoveryState::Synthesizing;
        self.last_error = Some(here);
        self.report(diagnostic);
    }

    /// Report that `kind` was required before the current token.
    pub(crate) fn report_expected(&mut self, kind: SyntaxKind) {
        let span = self.cursor.expected_span();
        let diagnostic = match kind {
            K::SemicolonToken => Diagnostic::new(ErrorCode::CS1002, span),
            K::CloseParenToken => Diagnostic::new(ErrorCode::CS1026, span),
            K::CloseBraceToken => Diagnostic::new(ErrorCode::CS1513, span),
            K::OpenBraceToken => Diagnostic::new(ErrorCode::CS1514, span),
            K::IdentifierToken if self.current().kind.is_reserved_keyword() => {
                let current = self.current();
                Diagnostic::new(ErrorCode::CS1041, current.span()).with_arg(current.text.clone())
            }
            K::IdentifierToken => Diagnostic::new(ErrorCode::CS1001, span),
            _ => Diagnostic::new(ErrorCode::CS1003, span).with_arg(kind.fixed_text()),
        };
        self.report_error(diagnostic);
    }

    /// Report an invalid expression term at the current token.
    pub(crate) fn report_invalid_term(&mut self) {
        let current = self.current();
        let diagnostic = if current.kind == K::EndOfFileToken {
            Diagnostic::new(ErrorCode::CS1733, self.cursor.expected_span())
        } else {
            Diagnostic::new(ErrorCode::CS1525, current.span()).with_arg(current.text.clone())
        };
        self.report_error(diagnostic);
    }

    /// Report `feature` at `span` when the options do not enable it.
    pub(crate) fn require_feature(&mut self, feature: Feature, span: Span) {
        if let Some(diagnostic) = self.options.check_feature(feature, span) {
            self.report(diagnostic);
        }
    }

    // ─── Skipping ───────────────────────────────────────────────────────

    /// Consume tokens up to one in `stop` (or end of file) into a
    /// `SkippedTokens` node carrying a single diagnostic with `code`.
    ///
    /// Returns `None` when nothing needed skipping.
    pub(crate) fn skip_until(&mut self, stop: TokenSet, code: ErrorCode) -> Option<SyntaxNode> {
        if self.at_eof() || self.at_set(stop) {
            return None;
        }
        Some(self.skip_while(code, |p| !p.at_eof() && !p.at_set(stop)))
    }

    /// Consume exactly one token as skipped. `None` at end of file.
    pub(crate) fn skip_token(&mut self, code: ErrorCode) -> Option<SyntaxNode> {
        if self.at_eof() {
            return None;
        }
        let mut first = true;
        Some(self.skip_while(code, |_| std::mem::take(&mut first)))
    }

    fn skip_while(
        &mut self,
        code: ErrorCode,
        mut keep_going: impl FnMut(&Self) -> bool,
    ) -> SyntaxNode {
        let mut builder = self.start();
        let first = self.current();
        let start = first.span().start;
        let mut end = first.text_end();
        self.recovery = RecoveryState::Skipping;
        while keep_going(self) {
            let token = self.cursor.advance().clone();
            end = token.text_end();
            builder.push(token);
        }
        tracing::debug!(?code, start, end, "skipped tokens");
        self.report(Diagnostic::new(code, Span::new(start, end)).with_arg(first.text.clone()));
        self.recovery = RecoveryState::Recovered;
        self.last_error = Some((self.position(), code));
        self.finish(builder, K::SkippedTokens)
    }

    // ─── Context ────────────────────────────────────────────────────────

    /// Run `f` with `flag` added to the context.
    pub(crate) fn with_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `flag` removed from the context.
    pub(crate) fn without_context<T>(
        &mut self,
        flag: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = saved.without(flag);
        let result = f(self);
        self.context = saved;
        result
    }
}
