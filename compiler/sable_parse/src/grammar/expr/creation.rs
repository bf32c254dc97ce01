//! `new` and `stackalloc` forms and the initializers they take.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::SyntaxKind;
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::disambiguate::{self, NewKind, NullableMode};
use crate::parser::Parser;
use crate::recovery::{TokenSet, EXPRESSION_START, PREDEFINED_TYPES};

use SyntaxKind as K;

const INITIALIZER_START: TokenSet = EXPRESSION_START.with(K::OpenBraceToken);

impl Parser<'_> {
    pub(super) fn parse_new(&mut self) -> SyntaxNode {
        match disambiguate::classify_new(self.cursor) {
            NewKind::Object => self.parse_object_creation(),
            NewKind::Array => self.parse_array_creation(),
            NewKind::ImplicitArray => self.parse_implicit_array_creation(),
            NewKind::Anonymous => self.parse_anonymous_object_creation(),
            NewKind::TargetTyped => self.parse_implicit_object_creation(),
            NewKind::TupleTyped => {
                if self.tuple_type_is_array_element() {
                    self.parse_array_creation()
                } else {
                    self.parse_object_creation()
                }
            }
        }
    }

    /// After `new (T1, T2)`, does a `[` follow?
    fn tuple_type_is_array_element(&self) -> bool {
        let mut lookahead = self.cursor;
        lookahead.advance();
        disambiguate::scan_non_array_type(&mut lookahead, NullableMode::Greedy).is_type()
            && lookahead.check(K::OpenBracketToken)
    }

    fn at_type_start(&self) -> bool {
        matches!(self.kind(), K::IdentifierToken | K::OpenParenToken)
            || self.at_set(PREDEFINED_TYPES)
    }

    /// `new T(args) { init }`. Without a type the name is synthesised
    /// silently; without arguments or initializer the argument list is.
    fn parse_object_creation(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        let ty = if self.at_type_start() {
            self.parse_non_array_type(NullableMode::Greedy)
        } else {
            self.missing_name()
        };
        b.push(ty);
        let has_arguments = self.at(K::OpenParenToken);
        if has_arguments {
            b.push(self.parse_argument_list());
        }
        if self.at(K::OpenBraceToken) {
            b.push(self.parse_object_or_collection_initializer());
        } else if !has_arguments {
            let span = self.cursor.expected_span();
            self.report_error(Diagnostic::new(ErrorCode::CS1526, span));
            let mut args = self.start();
            args.push(self.missing(K::OpenParenToken));
            args.push(self.missing(K::CloseParenToken));
            b.push(self.finish(args, K::ArgumentList));
        }
        self.finish(b, K::ObjectCreationExpression)
    }

    /// `new(args) { init }`
    fn parse_implicit_object_creation(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let new = self.bump();
        self.require_feature(Feature::TargetTypedObjectCreation, new.span());
        b.push(new);
        b.push(self.parse_argument_list());
        if self.at(K::OpenBraceToken) {
            b.push(self.parse_object_or_collection_initializer());
        }
        self.finish(b, K::ImplicitObjectCreationExpression)
    }

    /// `new T[n][,] { init }`
    fn parse_array_creation(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        let element = self.parse_non_array_type(NullableMode::Greedy);
        let mut array = self.start_with(element);
        let mut sized = false;
        let mut first = true;
        while self.at(K::OpenBracketToken) {
            let rank = self.parse_rank_specifier(first);
            sized |= first
                && rank
                    .child_nodes()
                    .any(|n| n.kind() != K::OmittedArraySizeExpression);
            first = false;
            array.push(rank);
        }
        b.push(self.finish(array, K::ArrayType));
        if self.at(K::OpenBraceToken) {
            b.push(self.parse_array_initializer());
        } else if !sized {
            let span = self.cursor.expected_span();
            self.report_error(Diagnostic::new(ErrorCode::CS1586, span));
        }
        self.finish(b, K::ArrayCreationExpression)
    }

    /// `new [,] { init }`
    fn parse_implicit_array_creation(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_bare_rank(&mut b);
        b.push(self.parse_array_initializer());
        self.finish(b, K::ImplicitArrayCreationExpression)
    }

    /// `[` commas `]` pushed as loose tokens.
    fn parse_bare_rank(&mut self, b: &mut NodeBuilder) {
        b.push(self.bump());
        while let Some(comma) = self.eat(K::CommaToken) {
            b.push(comma);
        }
        b.push(self.expect(K::CloseBracketToken));
    }

    /// `new { A = 1, b.C }`
    fn parse_anonymous_object_creation(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.bump());
        self.parse_separated(
            &mut b,
            K::CloseBraceToken,
            EXPRESSION_START,
            TokenSet::new(),
            true,
            Parser::parse_anonymous_member,
        );
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, K::AnonymousObjectCreationExpression)
    }

    fn parse_anonymous_member(&mut self) -> SyntaxNode {
        let mut b = self.start();
        if self.at(K::IdentifierToken) && self.nth(1) == K::EqualsToken {
            b.push(self.parse_name_equals());
        }
        b.push(self.parse_expression());
        self.finish(b, K::AnonymousObjectMemberDeclarator)
    }

    /// `name =`
    pub(crate) fn parse_name_equals(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let name = self.bump();
        b.push(self.wrap(name, K::IdentifierName));
        b.push(self.bump());
        self.finish(b, K::NameEquals)
    }

    /// `stackalloc T[n] { init }` or `stackalloc [] { init }`
    pub(super) fn parse_stackalloc(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        if self.at(K::OpenBracketToken) {
            self.parse_bare_rank(&mut b);
            b.push(self.parse_array_initializer());
            return self.finish(b, K::ImplicitStackAllocArrayCreationExpression);
        }
        let element = self.parse_non_array_type(NullableMode::Greedy);
        let mut array = self.start_with(element);
        if self.at(K::OpenBracketToken) {
            array.push(self.parse_rank_specifier(true));
        } else {
            self.report_expected(K::OpenBracketToken);
        }
        b.push(self.finish(array, K::ArrayType));
        if self.at(K::OpenBraceToken) {
            b.push(self.parse_array_initializer());
        }
        self.finish(b, K::StackAllocArrayCreationExpression)
    }

    // ─── Initializers ───────────────────────────────────────────────────

    /// `{ e, { e }, ... }`; a missing `{` is synthesised.
    pub(crate) fn parse_array_initializer(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.expect(K::OpenBraceToken));
        self.parse_separated(
            &mut b,
            K::CloseBraceToken,
            INITIALIZER_START,
            TokenSet::new(),
            true,
            Parser::parse_variable_initializer,
        );
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, K::ArrayInitializerExpression)
    }

    /// An expression, or a nested array initializer.
    pub(crate) fn parse_variable_initializer(&mut self) -> SyntaxNode {
        if self.at(K::OpenBraceToken) {
            return self.parse_array_initializer();
        }
        self.parse_expression()
    }

    /// `{ A = 1, [0] = 2 }` or `{ 1, { 2, 3 } }`, told apart by the first
    /// element.
    fn parse_object_or_collection_initializer(&mut self) -> SyntaxNode {
        let kind = if self.at_member_initializer(1) || self.nth(1) == K::CloseBraceToken {
            K::ObjectInitializerExpression
        } else {
            K::CollectionInitializerExpression
        };
        let mut b = self.start();
        b.push(self.bump());
        self.parse_separated(
            &mut b,
            K::CloseBraceToken,
            INITIALIZER_START,
            TokenSet::new(),
            true,
            Parser::parse_initializer_element,
        );
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, kind)
    }

    /// Does `name =` or `[args] =` start at token `n`?
    fn at_member_initializer(&self, n: usize) -> bool {
        match self.nth(n) {
            K::IdentifierToken => self.nth(n + 1) == K::EqualsToken,
            K::OpenBracketToken => {
                let mut lookahead = self.cursor;
                lookahead.set_position(lookahead.position() + n);
                disambiguate::skip_balanced(lookahead).is_some_and(|after| after.check(K::EqualsToken))
            }
            _ => false,
        }
    }

    fn parse_initializer_element(&mut self) -> SyntaxNode {
        if self.at(K::OpenBraceToken) {
            let mut b = self.start();
            b.push(self.bump());
            self.parse_separated(
                &mut b,
                K::CloseBraceToken,
                EXPRESSION_START,
                TokenSet::new(),
                false,
                Parser::parse_expression,
            );
            b.push(self.expect(K::CloseBraceToken));
            return self.finish(b, K::ComplexElementInitializerExpression);
        }
        if self.at_member_initializer(0) {
            let target = if self.at(K::IdentifierToken) {
                let name = self.bump();
                self.wrap(name, K::IdentifierName)
            } else {
                let mut b = self.start();
                b.push(self.parse_bracketed_argument_list());
                self.finish(b, K::ElementBindingExpression)
            };
            let mut b = self.start_with(target);
            b.push(self.bump());
            if self.at(K::OpenBraceToken) {
                b.push(self.parse_object_or_collection_initializer());
            } else {
                b.push(self.parse_expression());
            }
            return self.finish(b, K::SimpleAssignmentExpression);
        }
        self.parse_expression()
    }
}
