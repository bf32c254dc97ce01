//! Token cursor for navigating the token stream.
//!
//! The cursor borrows the lexer's token vector and never modifies it. Its
//! state is a single index, so copying a cursor is a free checkpoint and
//! classifiers scan ahead on a copy without touching the parser.

use std::sync::LazyLock;

use sable_ir::{Span, SyntaxKind};
use sable_syntax::Token;
use tracing::trace;

/// Returned for reads past the end of an empty stream.
static EOF: LazyLock<Token> = LazyLock::new(|| Token::missing(SyntaxKind::EndOfFileToken, 0));

/// Position in a token stream.
///
/// Invariant: the last token of a non-empty stream is `EndOfFileToken`, and
/// the position never moves past it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens
                .last()
                .map_or(true, |t| t.kind == SyntaxKind::EndOfFileToken),
            "token stream must end with EndOfFileToken"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Move to a position previously read from [`Cursor::position`].
    pub(crate) fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {pos} out of bounds (max {})",
            self.tokens.len()
        );
        self.pos = pos;
    }

    /// The current token.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        self.peek(0)
    }

    /// The token `n` places ahead; the EOF token once past the end.
    #[inline]
    pub(crate) fn peek(&self, n: usize) -> &'a Token {
        let tokens = self.tokens;
        match tokens.get(self.pos + n) {
            Some(token) => token,
            None => tokens.last().unwrap_or(&*EOF),
        }
    }

    #[inline]
    pub(crate) fn peek_kind(&self, n: usize) -> SyntaxKind {
        self.peek(n).kind
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> SyntaxKind {
        self.peek_kind(0)
    }

    /// Check if the current token is of `kind`.
    #[inline]
    pub(crate) fn check(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(SyntaxKind::EndOfFileToken)
    }

    /// The token before the current one, if any.
    pub(crate) fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Consume the current token and return it. At EOF the position stays put.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if token.kind != SyntaxKind::EndOfFileToken && self.pos < self.tokens.len() {
            trace!(pos = self.pos, kind = ?token.kind, span = %token.span(), "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is of `kind`.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Are the tokens at `n` and `n + 1` touching, with no trivia between?
    pub(crate) fn is_adjacent(&self, n: usize) -> bool {
        let first = self.peek(n);
        let second = self.peek(n + 1);
        !first.is_missing()
            && second.kind != SyntaxKind::EndOfFileToken
            && first.trailing.is_empty()
            && second.leading.is_empty()
    }

    /// Span where an "expected" diagnostic goes: just after the previous
    /// token's text, or at the current token when nothing precedes it.
    pub(crate) fn expected_span(&self) -> Span {
        match self.previous() {
            Some(prev) => Span::point(prev.text_end()),
            None => Span::point(self.current().span().start),
        }
    }
}

#[cfg(test)]
mod tests;
