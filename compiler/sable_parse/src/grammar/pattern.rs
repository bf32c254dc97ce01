//! Patterns.
//!
//! Grammar:
//! ```text
//! pattern      = conjunction { "or" conjunction }
//! conjunction  = negation { "and" negation }
//! negation     = "not" negation | primary
//! primary      = "(" ... ")" | "{" subpatterns "}" | "[" patterns "]"
//!              | ".." [pattern] | relational_op shift_expr | "_" | "var" designation
//!              | type designation | type clauses | type | constant
//! ```
//!
//! `and`, `or` and `not` are contextual; after a complete pattern an `and`
//! or `or` is always a combinator, never a designation.

use sable_ir::{Span, SyntaxKind};
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::context::ParseContext;
use crate::disambiguate::{self, NullableMode, TypeScan};
use crate::grammar::Precedence;
use crate::parser::Parser;
use crate::recovery::{TokenSet, EXPRESSION_START};

use SyntaxKind as K;

/// Tokens that can begin a pattern.
const PATTERN_START: TokenSet = EXPRESSION_START.union(TokenSet::of(&[
    K::OpenBraceToken,
    K::LessThanToken,
    K::LessThanEqualsToken,
    K::GreaterThanToken,
    K::GreaterThanEqualsToken,
]));

impl Parser<'_> {
    pub(crate) fn parse_pattern(&mut self) -> SyntaxNode {
        sable_stack::ensure_sufficient_stack(|| {
            self.with_context(ParseContext::IN_PATTERN, Parser::parse_disjunction)
        })
    }

    fn parse_disjunction(&mut self) -> SyntaxNode {
        let mut left = self.parse_conjunction();
        while self.at_contextual(K::OrKeyword) {
            let mut b = self.start_with(left);
            let or = self.bump_as(K::OrKeyword);
            self.require_feature(Feature::LogicalPatterns, or.span());
            b.push(or);
            b.push(self.parse_conjunction());
            left = self.finish(b, K::OrPattern);
        }
        left
    }

    fn parse_conjunction(&mut self) -> SyntaxNode {
        let mut left = self.parse_negation();
        while self.at_contextual(K::AndKeyword) {
            let mut b = self.start_with(left);
            let and = self.bump_as(K::AndKeyword);
            self.require_feature(Feature::LogicalPatterns, and.span());
            b.push(and);
            b.push(self.parse_negation());
            left = self.finish(b, K::AndPattern);
        }
        left
    }

    fn parse_negation(&mut self) -> SyntaxNode {
        if self.at_contextual(K::NotKeyword) && self.can_start_pattern_at(1) {
            let mut b = self.start();
            let not = self.bump_as(K::NotKeyword);
            self.require_feature(Feature::LogicalPatterns, not.span());
            b.push(not);
            b.push(sable_stack::ensure_sufficient_stack(|| self.parse_negation()));
            return self.finish(b, K::NotPattern);
        }
        self.parse_primary_pattern()
    }

    /// Can the token at `n` begin a pattern? Clause keywords cannot.
    fn can_start_pattern_at(&self, n: usize) -> bool {
        let kind = self.nth(n);
        PATTERN_START.contains(kind)
            && (kind != K::IdentifierToken
                || disambiguate::is_plain_identifier(&self.cursor, n)
                || self.nth_contextual(n, K::NotKeyword))
    }

    fn parse_primary_pattern(&mut self) -> SyntaxNode {
        match self.kind() {
            K::OpenParenToken => self.parse_parenthesized_or_positional_pattern(),
            K::OpenBraceToken => {
                let b = self.start();
                let span = self.current().span();
                self.parse_recursive_clauses(b, span)
            }
            K::OpenBracketToken => self.parse_list_pattern(),
            K::DotDotToken => self.parse_slice_pattern(),
            K::LessThanToken
            | K::LessThanEqualsToken
            | K::GreaterThanToken
            | K::GreaterThanEqualsToken => {
                let mut b = self.start();
                let op = self.bump();
                self.require_feature(Feature::RelationalPattern, op.span());
                b.push(op);
                b.push(self.parse_sub_expression(Precedence::Shift));
                self.finish(b, K::RelationalPattern)
            }
            K::IdentifierToken if self.at_discard() => {
                let mut b = self.start();
                let underscore = self.bump_as(K::UnderscoreToken);
                self.require_feature(Feature::Discards, underscore.span());
                b.push(underscore);
                self.finish(b, K::DiscardPattern)
            }
            K::IdentifierToken if self.at_contextual(K::VarKeyword) && self.at_designation(1) => {
                let mut b = self.start();
                b.push(self.bump_as(K::VarKeyword));
                b.push(self.parse_designation());
                self.finish(b, K::VarPattern)
            }
            _ => self.parse_type_or_constant_pattern(),
        }
    }

    /// `_` that is not the start of a longer name.
    fn at_discard(&self) -> bool {
        self.at_contextual(K::UnderscoreToken)
            && !matches!(
                self.nth(1),
                K::DotToken | K::LessThanToken | K::ColonColonToken | K::OpenParenToken
            )
    }

    /// Can a designation start at token `n`?
    fn at_designation(&self, n: usize) -> bool {
        self.nth(n) == K::OpenParenToken || disambiguate::is_plain_identifier(&self.cursor, n)
    }

    fn parse_type_or_constant_pattern(&mut self) -> SyntaxNode {
        let mut lookahead = self.cursor;
        let scan = disambiguate::scan_type(&mut lookahead, NullableMode::Pattern);
        if scan.is_type() {
            let next = lookahead.current_kind();
            let type_span = self.current().span();
            if disambiguate::is_plain_identifier(&lookahead, 0) {
                self.require_feature(Feature::PatternMatching, type_span);
                let ty = self.parse_context_type();
                let mut b = self.start_with(ty);
                b.push(self.parse_designation());
                return self.finish(b, K::DeclarationPattern);
            }
            if matches!(next, K::OpenParenToken | K::OpenBraceToken)
                || (next == K::OpenBracketToken && scan != TypeScan::Predefined)
            {
                let ty = self.parse_context_type();
                let b = self.start_with(ty);
                return self.parse_recursive_pattern_rest(b, type_span);
            }
            if matches!(scan, TypeScan::Predefined | TypeScan::Definite | TypeScan::Nullable)
                && next != K::DotToken
            {
                self.require_feature(Feature::TypePattern, type_span);
                let ty = self.parse_context_type();
                return self.wrap(ty, K::TypePattern);
            }
        }
        let expr = self.parse_sub_expression(Precedence::Shift);
        self.wrap(expr, K::ConstantPattern)
    }

    /// Clauses of a recursive pattern, then an optional designation. `b`
    /// already holds the type, if any; `feature_span` is where the pattern
    /// began.
    fn parse_recursive_pattern_rest(&mut self, mut b: NodeBuilder, feature_span: Span) -> SyntaxNode {
        if self.at(K::OpenParenToken) {
            b.push(self.parse_positional_clause());
        }
        self.parse_recursive_clauses(b, feature_span)
    }

    /// Property and list clauses and the designation of a recursive pattern.
    fn parse_recursive_clauses(&mut self, mut b: NodeBuilder, feature_span: Span) -> SyntaxNode {
        if self.at(K::OpenBraceToken) {
            b.push(self.parse_property_clause());
        }
        if self.at(K::OpenBracketToken) {
            b.push(self.parse_list_pattern());
        }
        if self.at_designation(0) {
            b.push(self.parse_designation());
        }
        self.require_feature(Feature::RecursivePatterns, feature_span);
        self.finish(b, K::RecursivePattern)
    }

    /// `(p)` alone is parenthesized; anything else is a positional clause.
    fn parse_parenthesized_or_positional_pattern(&mut self) -> SyntaxNode {
        let named = self.at_subpattern_name(1);
        if !named && self.nth(1) != K::CloseParenToken {
            let mut b = self.start();
            let open = self.bump();
            let open_span = open.span();
            b.push(open);
            let first = self.parse_pattern();
            if self.at(K::CloseParenToken)
                && !matches!(self.nth(1), K::OpenBraceToken | K::OpenBracketToken)
                && !self.at_designation(1)
            {
                self.require_feature(Feature::LogicalPatterns, open_span);
                b.push(first);
                b.push(self.bump());
                return self.finish(b, K::ParenthesizedPattern);
            }
            // A positional clause after all: continue its subpattern list.
            b.push(self.wrap(first, K::Subpattern));
            if let Some(comma) = self.eat(K::CommaToken) {
                b.push(comma);
                self.parse_subpatterns(&mut b, K::CloseParenToken);
            }
            b.push(self.expect(K::CloseParenToken));
            let clause = self.finish(b, K::PositionalPatternClause);
            let b = self.start_with(clause);
            return self.parse_recursive_clauses(b, open_span);
        }
        let b = self.start();
        let span = self.current().span();
        self.parse_recursive_pattern_rest(b, span)
    }

    fn parse_positional_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_subpatterns(&mut b, K::CloseParenToken);
        b.push(self.expect(K::CloseParenToken));
        self.finish(b, K::PositionalPatternClause)
    }

    fn parse_property_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_subpatterns(&mut b, K::CloseBraceToken);
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, K::PropertyPatternClause)
    }

    fn parse_subpatterns(&mut self, b: &mut NodeBuilder, close: SyntaxKind) {
        let trailing = close == K::CloseBraceToken;
        self.parse_separated(b, close, PATTERN_START, TokenSet::new(), trailing, Parser::parse_subpattern);
    }

    /// `name: pattern`, `a.b: pattern` or a bare pattern.
    fn parse_subpattern(&mut self) -> SyntaxNode {
        let mut b = self.start();
        if self.at(K::IdentifierToken) && self.nth(1) == K::ColonToken {
            b.push(self.parse_name_colon());
        } else if self.at_subpattern_name(0) {
            let span = self.current().span();
            let expr = self.parse_sub_expression(Precedence::Unary);
            let mut colon = self.start_with(expr);
            colon.push(self.bump());
            self.require_feature(Feature::ExtendedPropertyPatterns, span);
            b.push(self.finish(colon, K::ExpressionColon));
        }
        b.push(self.parse_pattern());
        self.finish(b, K::Subpattern)
    }

    /// Does `ident { . ident } :` start at token `n`?
    fn at_subpattern_name(&self, n: usize) -> bool {
        let mut i = n;
        if self.nth(i) != K::IdentifierToken {
            return false;
        }
        i += 1;
        while self.nth(i) == K::DotToken && self.nth(i + 1) == K::IdentifierToken {
            i += 2;
        }
        self.nth(i) == K::ColonToken
    }

    /// `[ p, .., p ] designation?`
    fn parse_list_pattern(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let open = self.bump();
        self.require_feature(Feature::ListPattern, open.span());
        b.push(open);
        self.parse_separated(
            &mut b,
            K::CloseBracketToken,
            PATTERN_START,
            TokenSet::new(),
            true,
            Parser::parse_pattern,
        );
        b.push(self.expect(K::CloseBracketToken));
        if disambiguate::is_plain_identifier(&self.cursor, 0) {
            b.push(self.parse_designation());
        }
        self.finish(b, K::ListPattern)
    }

    /// `..` with an optional nested pattern.
    fn parse_slice_pattern(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let dots = self.bump();
        self.require_feature(Feature::SlicePattern, dots.span());
        b.push(dots);
        if self.can_start_pattern_at(0) {
            b.push(self.parse_negation());
        }
        self.finish(b, K::SlicePattern)
    }

    // ─── Designations ───────────────────────────────────────────────────

    /// `x`, `_` or `(a, b)`.
    pub(crate) fn parse_designation(&mut self) -> SyntaxNode {
        let mut b = self.start();
        if self.at(K::OpenParenToken) {
            b.push(self.bump());
            self.parse_separated(
                &mut b,
                K::CloseParenToken,
                TokenSet::of(&[K::IdentifierToken, K::OpenParenToken]),
                TokenSet::new(),
                false,
                Parser::parse_designation,
            );
            b.push(self.expect(K::CloseParenToken));
            return self.finish(b, K::ParenthesizedVariableDesignation);
        }
        if self.at_contextual(K::UnderscoreToken) {
            b.push(self.bump_as(K::UnderscoreToken));
            return self.finish(b, K::DiscardDesignation);
        }
        b.push(self.expect_identifier());
        self.finish(b, K::SingleVariableDesignation)
    }
}
