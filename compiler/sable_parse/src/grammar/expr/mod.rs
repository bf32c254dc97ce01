//! Expressions.
//!
//! Binary operators are parsed by precedence climbing over a static
//! operator table. Prefix operators, casts and lambdas are handled before
//! the climb; primary expressions and their postfix chains in `primary`
//! and `postfix`.

mod creation;
mod lambda;
mod postfix;
mod primary;

use sable_ir::{Span, SyntaxKind};
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::context::ParseContext;
use crate::disambiguate::{self, NullableMode};
use crate::parser::Parser;
use crate::recovery::{TokenSet, EXPRESSION_START};

use SyntaxKind as K;

/// Binding strength of an operator, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Assignment,
    Lambda,
    Conditional,
    Coalescing,
    ConditionalOr,
    ConditionalAnd,
    LogicalOr,
    LogicalXor,
    LogicalAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Switch,
    Range,
    Unary,
}

impl Precedence {
    fn is_right_associative(self) -> bool {
        matches!(self, Precedence::Assignment | Precedence::Coalescing)
    }
}

/// Node kind and precedence of a binary operator token.
fn binary_operator(op: SyntaxKind) -> Option<(SyntaxKind, Precedence)> {
    use Precedence as P;
    let entry = match op {
        K::EqualsToken => (K::SimpleAssignmentExpression, P::Assignment),
        K::PlusEqualsToken => (K::AddAssignmentExpression, P::Assignment),
        K::MinusEqualsToken => (K::SubtractAssignmentExpression, P::Assignment),
        K::AsteriskEqualsToken => (K::MultiplyAssignmentExpression, P::Assignment),
        K::SlashEqualsToken => (K::DivideAssignmentExpression, P::Assignment),
        K::PercentEqualsToken => (K::ModuloAssignmentExpression, P::Assignment),
        K::AmpersandEqualsToken => (K::AndAssignmentExpression, P::Assignment),
        K::BarEqualsToken => (K::OrAssignmentExpression, P::Assignment),
        K::CaretEqualsToken => (K::ExclusiveOrAssignmentExpression, P::Assignment),
        K::LessThanLessThanEqualsToken => (K::LeftShiftAssignmentExpression, P::Assignment),
        K::GreaterThanGreaterThanEqualsToken => (K::RightShiftAssignmentExpression, P::Assignment),
        K::GreaterThanGreaterThanGreaterThanEqualsToken => {
            (K::UnsignedRightShiftAssignmentExpression, P::Assignment)
        }
        K::QuestionQuestionEqualsToken => (K::CoalesceAssignmentExpression, P::Assignment),
        K::QuestionQuestionToken => (K::CoalesceExpression, P::Coalescing),
        K::BarBarToken => (K::LogicalOrExpression, P::ConditionalOr),
        K::AmpersandAmpersandToken => (K::LogicalAndExpression, P::ConditionalAnd),
        K::BarToken => (K::BitwiseOrExpression, P::LogicalOr),
        K::CaretToken => (K::ExclusiveOrExpression, P::LogicalXor),
        K::AmpersandToken => (K::BitwiseAndExpression, P::LogicalAnd),
        K::EqualsEqualsToken => (K::EqualsExpression, P::Equality),
        K::ExclamationEqualsToken => (K::NotEqualsExpression, P::Equality),
        K::LessThanToken => (K::LessThanExpression, P::Relational),
        K::GreaterThanToken => (K::GreaterThanExpression, P::Relational),
        K::LessThanEqualsToken => (K::LessThanOrEqualExpression, P::Relational),
        K::GreaterThanEqualsToken => (K::GreaterThanOrEqualExpression, P::Relational),
        K::IsKeyword => (K::IsExpression, P::Relational),
        K::AsKeyword => (K::AsExpression, P::Relational),
        K::LessThanLessThanToken => (K::LeftShiftExpression, P::Shift),
        K::GreaterThanGreaterThanToken => (K::RightShiftExpression, P::Shift),
        K::GreaterThanGreaterThanGreaterThanToken => (K::UnsignedRightShiftExpression, P::Shift),
        K::PlusToken => (K::AddExpression, P::Additive),
        K::MinusToken => (K::SubtractExpression, P::Additive),
        K::AsteriskToken => (K::MultiplyExpression, P::Multiplicative),
        K::SlashToken => (K::DivideExpression, P::Multiplicative),
        K::PercentToken => (K::ModuloExpression, P::Multiplicative),
        K::SwitchKeyword => (K::SwitchExpression, P::Switch),
        K::DotDotToken => (K::RangeExpression, P::Range),
        _ => return None,
    };
    Some(entry)
}

/// Node kind of a prefix operator.
fn prefix_operator(op: SyntaxKind) -> Option<SyntaxKind> {
    Some(match op {
        K::PlusToken => K::UnaryPlusExpression,
        K::MinusToken => K::UnaryMinusExpression,
        K::TildeToken => K::BitwiseNotExpression,
        K::ExclamationToken => K::LogicalNotExpression,
        K::PlusPlusToken => K::PreIncrementExpression,
        K::MinusMinusToken => K::PreDecrementExpression,
        K::AsteriskToken => K::PointerIndirectionExpression,
        K::AmpersandToken => K::AddressOfExpression,
        K::CaretToken => K::IndexExpression,
        _ => return None,
    })
}

/// Tokens after `is T` that mean a pattern continues rather than a type test.
const PATTERN_AFTER_TYPE: TokenSet = TokenSet::of(&[
    K::IdentifierToken,
    K::OpenParenToken,
    K::OpenBraceToken,
    K::OpenBracketToken,
    K::DotToken,
    K::ColonColonToken,
]);

impl Parser<'_> {
    /// A full expression, assignment included.
    pub(crate) fn parse_expression(&mut self) -> SyntaxNode {
        self.parse_sub_expression(Precedence::Assignment)
    }

    /// An expression whose operators all bind at least as tightly as
    /// `precedence`.
    pub(crate) fn parse_sub_expression(&mut self, precedence: Precedence) -> SyntaxNode {
        sable_stack::ensure_sufficient_stack(|| self.parse_sub_expression_inner(precedence))
    }

    fn parse_sub_expression_inner(&mut self, precedence: Precedence) -> SyntaxNode {
        let mut left = self.parse_prefix_or_term(precedence);
        loop {
            let (op, count) = self.peek_operator();
            let (kind, op_precedence) =
                if self.at_contextual(K::WithKeyword) && self.nth(1) == K::OpenBraceToken {
                    (K::WithExpression, Precedence::Switch)
                } else {
                    match binary_operator(op) {
                        Some(entry) => entry,
                        None => break,
                    }
                };
            if op_precedence < precedence
                || (op_precedence == precedence && !op_precedence.is_right_associative())
            {
                break;
            }
            left = match kind {
                K::IsExpression => self.parse_is(left),
                K::AsExpression => self.parse_as(left),
                K::SwitchExpression => self.parse_switch_expression(left),
                K::WithExpression => self.parse_with_expression(left),
                K::RangeExpression => {
                    let mut b = self.start_with(left);
                    let dots = self.bump();
                    self.require_feature(Feature::RangeOperator, dots.span());
                    b.push(dots);
                    if self.can_start_range_operand() {
                        b.push(self.parse_sub_expression(Precedence::Range));
                    }
                    self.finish(b, K::RangeExpression)
                }
                _ => {
                    let mut b = self.start_with(left);
                    let token = self.bump_operator(op, count);
                    match op {
                        K::GreaterThanGreaterThanGreaterThanToken
                        | K::GreaterThanGreaterThanGreaterThanEqualsToken => {
                            self.require_feature(Feature::UnsignedRightShift, token.span());
                        }
                        K::QuestionQuestionEqualsToken => {
                            self.require_feature(Feature::NullCoalescingAssignment, token.span());
                        }
                        _ => {}
                    }
                    b.push(token);
                    b.push(self.parse_sub_expression(op_precedence));
                    self.finish(b, kind)
                }
            };
        }
        if self.at(K::QuestionToken) && precedence <= Precedence::Conditional {
            let mut b = self.start_with(left);
            b.push(self.bump());
            b.push(self.parse_expression());
            b.push(self.expect(K::ColonToken));
            b.push(self.parse_expression());
            left = self.finish(b, K::ConditionalExpression);
        }
        left
    }

    fn can_start_range_operand(&self) -> bool {
        self.at_set(EXPRESSION_START) && !self.at(K::DotDotToken) && !self.at_clause_keyword()
    }

    /// Contextual keywords that end an expression in patterns and switch arms.
    pub(crate) fn at_clause_keyword(&self) -> bool {
        self.at(K::IdentifierToken) && !disambiguate::is_plain_identifier(&self.cursor, 0)
    }

    fn parse_prefix_or_term(&mut self, precedence: Precedence) -> SyntaxNode {
        let kind = self.kind();
        if let Some(unary) = prefix_operator(kind) {
            let mut b = self.start();
            let op = self.bump();
            if unary == K::IndexExpression {
                self.require_feature(Feature::IndexOperator, op.span());
            }
            b.push(op);
            b.push(self.parse_sub_expression(Precedence::Unary));
            return self.finish(b, unary);
        }
        match kind {
            K::DotDotToken => {
                let mut b = self.start();
                let dots = self.bump();
                self.require_feature(Feature::RangeOperator, dots.span());
                b.push(dots);
                if self.can_start_range_operand() {
                    b.push(self.parse_sub_expression(Precedence::Range));
                }
                self.finish(b, K::RangeExpression)
            }
            K::ThrowKeyword => {
                let mut b = self.start();
                let throw = self.bump();
                self.require_feature(Feature::ThrowExpression, throw.span());
                b.push(throw);
                b.push(self.parse_sub_expression(Precedence::Coalescing));
                self.finish(b, K::ThrowExpression)
            }
            K::RefKeyword => {
                let mut b = self.start();
                let ref_kw = self.bump();
                self.require_feature(Feature::RefLocalsReturns, ref_kw.span());
                b.push(ref_kw);
                b.push(self.parse_sub_expression(Precedence::Unary));
                self.finish(b, K::RefExpression)
            }
            K::IdentifierToken
                if self.at_contextual(K::AwaitKeyword)
                    && self.context.in_async()
                    && self.at_await_operand() =>
            {
                let mut b = self.start();
                b.push(self.bump_as(K::AwaitKeyword));
                b.push(self.parse_sub_expression(Precedence::Unary));
                self.finish(b, K::AwaitExpression)
            }
            _ => self.parse_term(precedence),
        }
    }

    /// After `await`: does an operand follow, rather than an operator?
    fn at_await_operand(&self) -> bool {
        let next = self.nth(1);
        EXPRESSION_START.contains(next)
            && !matches!(
                next,
                K::PlusToken | K::MinusToken | K::AsteriskToken | K::AmpersandToken | K::CaretToken
            )
    }

    /// A primary expression followed by its postfix operators.
    fn parse_term(&mut self, precedence: Precedence) -> SyntaxNode {
        let primary = self.parse_primary(precedence);
        self.parse_postfix(primary)
    }

    // ─── Relational extensions ──────────────────────────────────────────

    /// `e is T` or `e is pattern`.
    fn parse_is(&mut self, left: SyntaxNode) -> SyntaxNode {
        let mut b = self.start_with(left);
        b.push(self.bump());
        if self.at_type_for_is() {
            let ty = self.with_context(ParseContext::IN_PATTERN, Parser::parse_context_type);
            b.push(ty);
            return self.finish(b, K::IsExpression);
        }
        let pattern = self.parse_pattern();
        b.push(pattern);
        self.finish(b, K::IsPatternExpression)
    }

    /// Does a bare type, with nothing making it a pattern, follow `is`?
    fn at_type_for_is(&self) -> bool {
        if self.at(K::OpenParenToken)
            || self.at_contextual(K::VarKeyword)
            || self.at_contextual(K::NotKeyword)
            || self.at_contextual(K::UnderscoreToken)
        {
            return false;
        }
        let mut lookahead = self.cursor;
        if !disambiguate::scan_type(&mut lookahead, NullableMode::Pattern).is_type() {
            return false;
        }
        !PATTERN_AFTER_TYPE.contains(lookahead.current_kind())
    }

    fn parse_as(&mut self, left: SyntaxNode) -> SyntaxNode {
        let mut b = self.start_with(left);
        b.push(self.bump());
        let ty = self.with_context(ParseContext::IN_PATTERN, Parser::parse_context_type);
        b.push(ty);
        self.finish(b, K::AsExpression)
    }

    /// `e switch { pattern [when e] => e, ... }`
    fn parse_switch_expression(&mut self, governing: SyntaxNode) -> SyntaxNode {
        let mut b = self.start_with(governing);
        let switch = self.bump();
        self.require_feature(Feature::SwitchExpression, switch.span());
        b.push(switch);
        b.push(self.expect(K::OpenBraceToken));
        let starts = EXPRESSION_START.union(TokenSet::of(&[
            K::OpenBraceToken,
            K::LessThanToken,
            K::LessThanEqualsToken,
            K::GreaterThanToken,
            K::GreaterThanEqualsToken,
        ]));
        self.parse_separated(
            &mut b,
            K::CloseBraceToken,
            starts,
            TokenSet::new(),
            true,
            Parser::parse_switch_expression_arm,
        );
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, K::SwitchExpression)
    }

    fn parse_switch_expression_arm(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.parse_pattern());
        b.push_opt(self.parse_when_clause());
        b.push(self.expect(K::EqualsGreaterThanToken));
        b.push(self.parse_expression());
        self.finish(b, K::SwitchExpressionArm)
    }

    /// `when` condition, after a pattern.
    pub(crate) fn parse_when_clause(&mut self) -> Option<SyntaxNode> {
        if !self.at_contextual(K::WhenKeyword) {
            return None;
        }
        let mut b = self.start();
        b.push(self.bump_as(K::WhenKeyword));
        b.push(self.parse_expression());
        Some(self.finish(b, K::WhenClause))
    }

    /// `e with { A = 1, ... }`
    fn parse_with_expression(&mut self, left: SyntaxNode) -> SyntaxNode {
        let mut b = self.start_with(left);
        let with = self.bump_as(K::WithKeyword);
        self.require_feature(Feature::Records, with.span());
        b.push(with);
        let mut init = self.start();
        init.push(self.bump());
        self.parse_separated(
            &mut init,
            K::CloseBraceToken,
            EXPRESSION_START,
            TokenSet::new(),
            true,
            Parser::parse_expression,
        );
        init.push(self.expect(K::CloseBraceToken));
        b.push(self.finish(init, K::WithInitializerExpression));
        self.finish(b, K::WithExpression)
    }

    /// Span from `start` to the end of the previous token.
    pub(crate) fn span_from(&self, start: u32) -> Span {
        let end = self.cursor.previous().map_or(start, |t| t.text_end().max(start));
        Span::new(start, end)
    }
}
