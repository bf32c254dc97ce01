//! Postfix chains: member access, invocation, element access,
//! conditional access and the postfix operators.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::SyntaxKind;
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::context::ParseContext;
use crate::disambiguate;
use crate::parser::Parser;
use crate::recovery::{TokenSet, EXPRESSION_START};

use SyntaxKind as K;

/// Tokens that can start an argument, beyond expression starts.
const ARGUMENT_START: TokenSet =
    EXPRESSION_START.union(TokenSet::of(&[K::OutKeyword, K::InKeyword]));

impl Parser<'_> {
    pub(super) fn parse_postfix(&mut self, mut expr: SyntaxNode) -> SyntaxNode {
        loop {
            expr = match self.kind() {
                K::OpenParenToken => {
                    let mut b = self.start_with(expr);
                    b.push(self.parse_argument_list());
                    self.finish(b, K::InvocationExpression)
                }
                K::OpenBracketToken => {
                    let mut b = self.start_with(expr);
                    b.push(self.parse_bracketed_argument_list());
                    self.finish(b, K::ElementAccessExpression)
                }
                K::DotToken => {
                    let mut b = self.start_with(expr);
                    b.push(self.bump());
                    b.push(self.parse_simple_name(true));
                    self.finish(b, K::SimpleMemberAccessExpression)
                }
                K::MinusGreaterThanToken => {
                    let mut b = self.start_with(expr);
                    b.push(self.bump());
                    b.push(self.parse_simple_name(true));
                    self.finish(b, K::PointerMemberAccessExpression)
                }
                K::PlusPlusToken => self.postfix_operator(expr, K::PostIncrementExpression),
                K::MinusMinusToken => self.postfix_operator(expr, K::PostDecrementExpression),
                K::ExclamationToken => {
                    self.postfix_operator(expr, K::SuppressNullableWarningExpression)
                }
                K::QuestionToken if self.at_conditional_access() => {
                    self.parse_conditional_access(expr)
                }
                _ => return expr,
            };
        }
    }

    fn postfix_operator(&mut self, operand: SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
        let mut b = self.start_with(operand);
        b.push(self.bump());
        self.finish(b, kind)
    }

    /// `?.` always; `?[` only when the bracket touches the `?`, which keeps
    /// `c ? [1] : [2]` a conditional over collection expressions.
    fn at_conditional_access(&self) -> bool {
        match self.nth(1) {
            K::DotToken => self.nth(2) != K::NumericLiteralToken,
            K::OpenBracketToken => self.cursor.is_adjacent(0),
            _ => false,
        }
    }

    /// `e?.m`, `e?[i]` and whatever chain hangs off the binding.
    fn parse_conditional_access(&mut self, expr: SyntaxNode) -> SyntaxNode {
        let mut b = self.start_with(expr);
        let question = self.bump();
        self.require_feature(Feature::NullPropagation, question.span());
        b.push(question);
        let mut binding = self.start();
        let binding = if self.at(K::DotToken) {
            binding.push(self.bump());
            binding.push(self.parse_simple_name(true));
            self.finish(binding, K::MemberBindingExpression)
        } else {
            binding.push(self.parse_bracketed_argument_list());
            self.finish(binding, K::ElementBindingExpression)
        };
        b.push(sable_stack::ensure_sufficient_stack(|| self.parse_postfix(binding)));
        self.finish(b, K::ConditionalAccessExpression)
    }

    // ─── Arguments ──────────────────────────────────────────────────────

    /// `( arguments )`
    pub(crate) fn parse_argument_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.expect(K::OpenParenToken));
        self.without_context(ParseContext::IN_QUERY, |p| {
            p.parse_separated(
                &mut b,
                K::CloseParenToken,
                ARGUMENT_START,
                TokenSet::new(),
                false,
                |p| p.parse_argument(true),
            );
        });
        b.push(self.expect(K::CloseParenToken));
        self.finish(b, K::ArgumentList)
    }

    /// `[ arguments ]`; an empty list reports a missing value.
    pub(crate) fn parse_bracketed_argument_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        if self.at(K::CloseBracketToken) {
            let span = self.current().span();
            self.report_error(Diagnostic::new(ErrorCode::CS0443, span));
        }
        self.without_context(ParseContext::IN_QUERY, |p| {
            p.parse_separated(
                &mut b,
                K::CloseBracketToken,
                ARGUMENT_START,
                TokenSet::new(),
                false,
                |p| p.parse_argument(true),
            );
        });
        b.push(self.expect(K::CloseBracketToken));
        self.finish(b, K::BracketedArgumentList)
    }

    /// `[name:] [ref|out|in] expr`. Tuple elements take no ref kind.
    pub(crate) fn parse_argument(&mut self, with_ref_kind: bool) -> SyntaxNode {
        let mut b = self.start();
        if self.at(K::IdentifierToken) && self.nth(1) == K::ColonToken {
            b.push(self.parse_name_colon());
        }
        let mut out = false;
        if with_ref_kind && matches!(self.kind(), K::RefKeyword | K::OutKeyword | K::InKeyword) {
            out = self.at(K::OutKeyword);
            b.push(self.bump());
        }
        // `f(a < b, c > d)` stays two comparisons; only `out` arguments and
        // tuple elements declare.
        if (out || !with_ref_kind) && disambiguate::is_declaration_expression(self.cursor) {
            b.push(self.parse_declaration_expression());
        } else {
            b.push(self.parse_expression());
        }
        self.finish(b, K::Argument)
    }

    /// `name :`
    pub(crate) fn parse_name_colon(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let name = self.bump();
        b.push(self.wrap(name, K::IdentifierName));
        b.push(self.bump());
        self.finish(b, K::NameColon)
    }
}
