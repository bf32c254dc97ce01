//! Primary expressions: literals, names, keywords with operands,
//! parenthesized forms and collection expressions.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{Span, SyntaxKind};
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::context::ParseContext;
use crate::disambiguate::{self, ParenKind};
use crate::grammar::Precedence;
use crate::parser::Parser;
use crate::recovery::{TokenSet, EXPRESSION_START, PREDEFINED_TYPES};

use SyntaxKind as K;

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self, precedence: Precedence) -> SyntaxNode {
        let lambda_allowed = precedence <= Precedence::Lambda;
        match self.kind() {
            K::IdentifierToken => self.parse_identifier_primary(lambda_allowed),
            K::NumericLiteralToken => self.parse_literal(K::NumericLiteralExpression),
            K::StringLiteralToken
            | K::SingleLineRawStringLiteralToken
            | K::MultiLineRawStringLiteralToken => self.parse_literal(K::StringLiteralExpression),
            K::Utf8StringLiteralToken => self.parse_literal(K::Utf8StringLiteralExpression),
            K::CharacterLiteralToken => self.parse_literal(K::CharacterLiteralExpression),
            K::InterpolatedStringToken | K::InterpolatedRawStringToken => {
                let token = self.bump();
                self.require_feature(Feature::InterpolatedStrings, token.span());
                self.wrap(token, K::InterpolatedStringExpression)
            }
            K::TrueKeyword => self.parse_literal(K::TrueLiteralExpression),
            K::FalseKeyword => self.parse_literal(K::FalseLiteralExpression),
            K::NullKeyword => self.parse_literal(K::NullLiteralExpression),
            K::ThisKeyword => self.parse_literal(K::ThisExpression),
            K::BaseKeyword => self.parse_literal(K::BaseExpression),
            K::ArgListKeyword => self.parse_literal(K::ArgListExpression),
            K::DefaultKeyword => self.parse_default(),
            K::TypeOfKeyword => self.parse_type_operand(K::TypeOfExpression),
            K::SizeOfKeyword => self.parse_type_operand(K::SizeOfExpression),
            K::CheckedKeyword => self.parse_checked(K::CheckedExpression),
            K::UncheckedKeyword => self.parse_checked(K::UncheckedExpression),
            K::OpenParenToken => self.parse_parenthesized_primary(lambda_allowed),
            K::OpenBracketToken => self.parse_collection_expression(),
            K::NewKeyword => self.parse_new(),
            K::StackAllocKeyword => self.parse_stackalloc(),
            K::DelegateKeyword => {
                let b = self.start();
                self.parse_anonymous_method(b, false)
            }
            K::StaticKeyword if disambiguate::is_lambda_after_modifiers(self.cursor) => {
                self.parse_lambda_with_modifiers()
            }
            kind if PREDEFINED_TYPES.contains(kind) => {
                let keyword = self.bump();
                self.wrap(keyword, K::PredefinedType)
            }
            _ => {
                self.report_invalid_term();
                self.missing_name()
            }
        }
    }

    fn parse_literal(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let token = self.bump();
        self.wrap(token, kind)
    }

    fn parse_identifier_primary(&mut self, lambda_allowed: bool) -> SyntaxNode {
        if lambda_allowed && self.nth(1) == K::EqualsGreaterThanToken {
            let b = self.start();
            return self.parse_simple_lambda(b, false);
        }
        if self.at_contextual(K::AsyncKeyword) && disambiguate::is_lambda_after_modifiers(self.cursor)
        {
            return self.parse_lambda_with_modifiers();
        }
        if disambiguate::is_query_start(self.cursor) {
            return self.parse_query_expression();
        }
        if self.at_contextual(K::VarKeyword)
            && self.nth(1) == K::OpenParenToken
            && disambiguate::is_declaration_expression(self.cursor)
        {
            return self.parse_declaration_expression();
        }
        self.parse_alias_qualified_or_simple(true)
    }

    /// `default` literal or `default(T)`.
    fn parse_default(&mut self) -> SyntaxNode {
        if self.nth(1) != K::OpenParenToken {
            let keyword = self.bump();
            self.require_feature(Feature::DefaultLiteral, keyword.span());
            return self.wrap(keyword, K::DefaultLiteralExpression);
        }
        self.parse_type_operand(K::DefaultExpression)
    }

    /// `keyword ( type )`
    fn parse_type_operand(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.expect(K::OpenParenToken));
        b.push(self.parse_type());
        b.push(self.expect(K::CloseParenToken));
        self.finish(b, kind)
    }

    /// `checked ( expr )`
    fn parse_checked(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.expect(K::OpenParenToken));
        b.push(self.parse_expression());
        b.push(self.expect(K::CloseParenToken));
        self.finish(b, kind)
    }

    // ─── Parentheses ────────────────────────────────────────────────────

    fn parse_parenthesized_primary(&mut self, lambda_allowed: bool) -> SyntaxNode {
        let verdict = disambiguate::classify_parenthesized(self.cursor, self.context.in_query());
        match verdict {
            ParenKind::Lambda if lambda_allowed => {
                let b = self.start();
                self.parse_parenthesized_lambda(b, false)
            }
            ParenKind::Cast => self.parse_cast(),
            ParenKind::Tuple => self.parse_tuple_expression(),
            ParenKind::Lambda | ParenKind::Parenthesized => self.parse_parenthesized_expression(),
        }
    }

    fn parse_cast(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.parse_type());
        b.push(self.expect(K::CloseParenToken));
        b.push(self.parse_sub_expression(Precedence::Unary));
        self.finish(b, K::CastExpression)
    }

    /// `( expr )`, turning into a tuple if a comma shows up after all.
    fn parse_parenthesized_expression(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let open = self.bump();
        let open_span = open.span();
        b.push(open);
        let inner = self.without_context(ParseContext::IN_QUERY, Parser::parse_expression);
        if !self.at(K::CommaToken) {
            b.push(inner);
            b.push(self.expect(K::CloseParenToken));
            return self.finish(b, K::ParenthesizedExpression);
        }
        let first = self.wrap(inner, K::Argument);
        b.push(first);
        b.push(self.bump());
        self.finish_tuple_elements(b, open_span, 1)
    }

    fn parse_tuple_expression(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let open = self.bump();
        let open_span = open.span();
        b.push(open);
        self.finish_tuple_elements(b, open_span, 0)
    }

    /// Remaining tuple elements after `(` and `parsed` leading elements.
    fn finish_tuple_elements(
        &mut self,
        mut b: NodeBuilder,
        open_span: Span,
        parsed: usize,
    ) -> SyntaxNode {
        self.require_feature(Feature::Tuples, open_span);
        let mut elements = parsed;
        self.without_context(ParseContext::IN_QUERY, |p| {
            p.parse_separated(
                &mut b,
                K::CloseParenToken,
                EXPRESSION_START,
                TokenSet::new(),
                false,
                |p| {
                    elements += 1;
                    p.parse_argument(false)
                },
            );
        });
        let close = self.expect(K::CloseParenToken);
        b.push(close);
        if elements < 2 {
            let span = self.span_from(open_span.start);
            self.report_error(Diagnostic::new(ErrorCode::CS8124, span));
        }
        self.finish(b, K::TupleExpression)
    }

    /// `var (a, b)` in a deconstruction, or `T x` in an argument.
    pub(crate) fn parse_declaration_expression(&mut self) -> SyntaxNode {
        let mut b = self.start();
        if self.at_contextual(K::VarKeyword) && self.nth(1) == K::OpenParenToken {
            let var = self.bump();
            b.push(self.wrap(var, K::IdentifierName));
        } else {
            b.push(self.parse_type());
        }
        b.push(self.parse_designation());
        self.finish(b, K::DeclarationExpression)
    }

    // ─── Collection expressions ─────────────────────────────────────────

    /// `[ e, ..spread, ... ]`
    fn parse_collection_expression(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let open = self.bump();
        self.require_feature(Feature::CollectionExpressions, open.span());
        b.push(open);
        self.parse_separated(
            &mut b,
            K::CloseBracketToken,
            EXPRESSION_START,
            TokenSet::new(),
            true,
            Parser::parse_collection_element,
        );
        b.push(self.expect(K::CloseBracketToken));
        self.finish(b, K::CollectionExpression)
    }

    fn parse_collection_element(&mut self) -> SyntaxNode {
        let mut b = self.start();
        if self.at(K::DotDotToken) {
            b.push(self.bump());
            b.push(self.parse_expression());
            return self.finish(b, K::SpreadElement);
        }
        b.push(self.parse_expression());
        self.finish(b, K::ExpressionElement)
    }
}
