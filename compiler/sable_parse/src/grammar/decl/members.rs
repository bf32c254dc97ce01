//! Members of types: fields, events, methods, operators, constructors,
//! destructors, properties and indexers.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::SyntaxKind;
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::disambiguate;
use crate::grammar::decl::modifiers::Modifiers;
use crate::parser::Parser;
use crate::progress::Progress;
use crate::recovery::{TokenSet, MEMBER_START, MODIFIERS, PREDEFINED_TYPES};

use SyntaxKind as K;

/// Tokens that can begin the type of a member.
const MEMBER_TYPE_START: TokenSet =
    TokenSet::of(&[K::IdentifierToken, K::OpenParenToken, K::RefKeyword]).union(PREDEFINED_TYPES);

/// Operator tokens a user-defined operator can name.
const OVERLOADABLE_OPERATORS: TokenSet = TokenSet::of(&[
    K::PlusToken,
    K::MinusToken,
    K::ExclamationToken,
    K::TildeToken,
    K::PlusPlusToken,
    K::MinusMinusToken,
    K::AsteriskToken,
    K::SlashToken,
    K::PercentToken,
    K::AmpersandToken,
    K::BarToken,
    K::CaretToken,
    K::LessThanLessThanToken,
    K::GreaterThanToken,
    K::EqualsEqualsToken,
    K::ExclamationEqualsToken,
    K::LessThanToken,
    K::LessThanEqualsToken,
    K::GreaterThanEqualsToken,
    K::TrueKeyword,
    K::FalseKeyword,
]);

const ACCESSOR_START: TokenSet =
    MODIFIERS.union(TokenSet::of(&[K::IdentifierToken, K::OpenBracketToken]));

impl Parser<'_> {
    /// Members of a type body, up to its `}`.
    pub(crate) fn parse_type_members(&mut self, b: &mut NodeBuilder) {
        while !self.at(K::CloseBraceToken) && !self.at(K::NamespaceKeyword) && !self.at_eof() {
            let start = self.position();
            if self.at_set(MEMBER_START) {
                b.push(self.parse_member_declaration());
            } else {
                let resync = MEMBER_START.with(K::CloseBraceToken);
                b.push_opt(self.skip_until(resync, ErrorCode::CS1519));
            }
            if Progress::since(start, self.position()).none() {
                b.push_opt(self.skip_token(ErrorCode::CS1519));
            }
        }
    }

    /// One member, type declarations included.
    pub(crate) fn parse_member_declaration(&mut self) -> SyntaxNode {
        sable_stack::ensure_sufficient_stack(|| {
            let mut b = self.start();
            self.parse_attribute_lists(&mut b);
            let modifiers = self.parse_modifiers(&mut b);
            self.parse_member_rest(b, modifiers)
        })
    }

    /// The part of a member after its attributes and modifiers.
    pub(crate) fn parse_member_rest(&mut self, b: NodeBuilder, modifiers: Modifiers) -> SyntaxNode {
        if self.type_declaration_at(0) {
            return self.parse_type_declaration(b, modifiers);
        }
        match self.kind() {
            K::TildeToken => return self.parse_destructor(b),
            K::EventKeyword => return self.parse_event(b),
            K::ImplicitKeyword | K::ExplicitKeyword => return self.parse_conversion_operator(b),
            K::IdentifierToken if self.nth(1) == K::OpenParenToken => {
                return self.parse_constructor(b);
            }
            _ => {}
        }
        if !self.at_set(MEMBER_TYPE_START) {
            return self.finish_incomplete_member(b);
        }
        let ty = self.parse_type();
        let segments = disambiguate::explicit_interface_segments(self.cursor);
        let interface = (segments > 0).then(|| self.parse_explicit_interface_specifier(segments));
        match self.kind() {
            K::ThisKeyword => self.parse_indexer(b, ty, interface),
            K::OperatorKeyword => self.parse_operator(b, ty, interface),
            K::IdentifierToken => match self.nth(1) {
                K::OpenParenToken | K::LessThanToken => {
                    self.parse_method(b, ty, interface, modifiers)
                }
                K::OpenBraceToken | K::EqualsGreaterThanToken => {
                    self.parse_property(b, ty, interface)
                }
                _ if interface.is_some() => self.parse_property(b, ty, interface),
                _ => self.parse_field(b, ty),
            },
            _ => {
                let mut b = b;
                b.push(ty);
                b.push_opt(interface);
                self.finish_incomplete_member(b)
            }
        }
    }

    /// Whatever was collected, reported at the token that did not fit.
    fn finish_incomplete_member(&mut self, b: NodeBuilder) -> SyntaxNode {
        let current = self.current();
        let span = if self.at_eof() {
            self.cursor.expected_span()
        } else {
            current.span()
        };
        self.report_error(Diagnostic::new(ErrorCode::CS1519, span).with_arg(current.text.clone()));
        self.finish(b, K::IncompleteMember)
    }

    /// `IA.IB.` before a member name.
    fn parse_explicit_interface_specifier(&mut self, segments: usize) -> SyntaxNode {
        let mut name = self.parse_simple_name(false);
        for _ in 1..segments {
            let mut qualified = self.start_with(name);
            qualified.push(self.bump());
            qualified.push(self.parse_simple_name(false));
            name = self.finish(qualified, K::QualifiedName);
        }
        let mut b = self.start_with(name);
        b.push(self.bump());
        self.finish(b, K::ExplicitInterfaceSpecifier)
    }

    // ─── Fields and events ──────────────────────────────────────────────

    fn parse_field(&mut self, mut b: NodeBuilder, ty: SyntaxNode) -> SyntaxNode {
        b.push(self.finish_variable_declaration(ty));
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, K::FieldDeclaration)
    }

    /// `event T E;` or `event T E { add { } remove { } }`
    fn parse_event(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        b.push(self.bump());
        let ty = self.parse_type();
        let segments = disambiguate::explicit_interface_segments(self.cursor);
        if segments == 0 && self.nth(1) != K::OpenBraceToken {
            b.push(self.finish_variable_declaration(ty));
            b.push(self.expect(K::SemicolonToken));
            return self.finish(b, K::EventFieldDeclaration);
        }
        b.push(ty);
        if segments > 0 {
            b.push(self.parse_explicit_interface_specifier(segments));
        }
        b.push(self.expect_identifier());
        if self.at(K::OpenBraceToken) {
            b.push(self.parse_accessor_list(true));
        } else {
            self.report_expected(K::OpenBraceToken);
        }
        self.finish(b, K::EventDeclaration)
    }

    // ─── Methods and operators ──────────────────────────────────────────

    fn parse_method(
        &mut self,
        mut b: NodeBuilder,
        ty: SyntaxNode,
        interface: Option<SyntaxNode>,
        modifiers: Modifiers,
    ) -> SyntaxNode {
        b.push(ty);
        b.push_opt(interface);
        b.push(self.bump());
        if self.at(K::LessThanToken) {
            b.push(self.parse_type_parameter_list());
        }
        b.push(self.parse_parameter_list(false));
        self.parse_constraint_clauses(&mut b);
        self.parse_function_body(&mut b, modifiers.is_async());
        self.finish(b, K::MethodDeclaration)
    }

    /// `T operator +(T a, T b) body`
    fn parse_operator(
        &mut self,
        mut b: NodeBuilder,
        ty: SyntaxNode,
        interface: Option<SyntaxNode>,
    ) -> SyntaxNode {
        b.push(ty);
        b.push_opt(interface);
        b.push(self.bump());
        b.push_opt(self.eat(K::CheckedKeyword));
        let (op, count) = self.peek_operator();
        if OVERLOADABLE_OPERATORS.contains(op)
            || matches!(
                op,
                K::GreaterThanGreaterThanToken | K::GreaterThanGreaterThanGreaterThanToken
            )
        {
            b.push(self.bump_operator(op, count));
        } else {
            b.push(self.expect(K::PlusToken));
        }
        b.push(self.parse_parameter_list(false));
        self.parse_function_body(&mut b, false);
        self.finish(b, K::OperatorDeclaration)
    }

    /// `implicit operator T(S s) body`
    fn parse_conversion_operator(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        b.push(self.bump());
        b.push(self.expect(K::OperatorKeyword));
        b.push_opt(self.eat(K::CheckedKeyword));
        b.push(self.parse_type());
        b.push(self.parse_parameter_list(false));
        self.parse_function_body(&mut b, false);
        self.finish(b, K::ConversionOperatorDeclaration)
    }

    /// `C(params) : base(args) body`
    fn parse_constructor(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        b.push(self.bump());
        b.push(self.parse_parameter_list(false));
        if self.at(K::ColonToken) {
            let mut initializer = self.start();
            initializer.push(self.bump());
            let kind = if self.at(K::ThisKeyword) {
                initializer.push(self.bump());
                K::ThisConstructorInitializer
            } else {
                initializer.push(self.expect(K::BaseKeyword));
                K::BaseConstructorInitializer
            };
            initializer.push(self.parse_argument_list());
            b.push(self.finish(initializer, kind));
        }
        self.parse_function_body(&mut b, false);
        self.finish(b, K::ConstructorDeclaration)
    }

    /// `~C() body`
    fn parse_destructor(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        b.push(self.bump());
        b.push(self.expect_identifier());
        b.push(self.parse_parameter_list(false));
        self.parse_function_body(&mut b, false);
        self.finish(b, K::DestructorDeclaration)
    }

    /// A block, `=> e;` or `;`, pushed into `b`. Anything else is reported
    /// as a missing `;`.
    pub(crate) fn parse_function_body(&mut self, b: &mut NodeBuilder, is_async: bool) {
        match self.kind() {
            K::OpenBraceToken => b.push(self.in_function_body(is_async, Parser::parse_block)),
            K::EqualsGreaterThanToken => {
                b.push(self.parse_arrow_expression_clause(is_async));
                b.push(self.expect(K::SemicolonToken));
            }
            _ => b.push(self.expect(K::SemicolonToken)),
        }
    }

    /// `=> expr`
    fn parse_arrow_expression_clause(&mut self, is_async: bool) -> SyntaxNode {
        let mut b = self.start();
        let arrow = self.bump();
        self.require_feature(Feature::ExpressionBodiedMembers, arrow.span());
        b.push(arrow);
        b.push(self.in_function_body(is_async, Parser::parse_expression));
        self.finish(b, K::ArrowExpressionClause)
    }

    // ─── Properties and indexers ────────────────────────────────────────

    /// `T P { get; set; } = value;` or `T P => e;`
    fn parse_property(
        &mut self,
        mut b: NodeBuilder,
        ty: SyntaxNode,
        interface: Option<SyntaxNode>,
    ) -> SyntaxNode {
        b.push(ty);
        b.push_opt(interface);
        b.push(self.expect_identifier());
        match self.kind() {
            K::OpenBraceToken => {
                b.push(self.parse_accessor_list(false));
                if self.at(K::EqualsToken) {
                    b.push(self.parse_equals_value_clause());
                    b.push(self.expect(K::SemicolonToken));
                }
            }
            K::EqualsGreaterThanToken => {
                b.push(self.parse_arrow_expression_clause(false));
                b.push(self.expect(K::SemicolonToken));
            }
            _ => self.report_expected(K::OpenBraceToken),
        }
        self.finish(b, K::PropertyDeclaration)
    }

    /// `T this[params] { get; }` or `T this[params] => e;`
    fn parse_indexer(
        &mut self,
        mut b: NodeBuilder,
        ty: SyntaxNode,
        interface: Option<SyntaxNode>,
    ) -> SyntaxNode {
        b.push(ty);
        b.push_opt(interface);
        b.push(self.bump());
        b.push(self.parse_bracketed_parameter_list());
        match self.kind() {
            K::EqualsGreaterThanToken => {
                b.push(self.parse_arrow_expression_clause(false));
                b.push(self.expect(K::SemicolonToken));
            }
            K::OpenBraceToken => b.push(self.parse_accessor_list(false)),
            _ => self.report_expected(K::OpenBraceToken),
        }
        self.finish(b, K::IndexerDeclaration)
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    /// `{ accessors }`; event accessor lists take `add` and `remove`.
    fn parse_accessor_list(&mut self, is_event: bool) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        while !self.at(K::CloseBraceToken) && !self.at_eof() {
            let start = self.position();
            if self.at_set(ACCESSOR_START) {
                b.push(self.parse_accessor(is_event));
            } else {
                let resync = ACCESSOR_START.with(K::CloseBraceToken);
                b.push_opt(self.skip_until(resync, ErrorCode::CS1073));
            }
            if Progress::since(start, self.position()).none() {
                b.push_opt(self.skip_token(ErrorCode::CS1073));
            }
        }
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, K::AccessorList)
    }

    fn parse_accessor(&mut self, is_event: bool) -> SyntaxNode {
        let mut b = self.start();
        self.parse_attribute_lists(&mut b);
        while self.at_set(MODIFIERS) {
            b.push(self.bump());
        }
        let keyword = self.current().contextual_kind;
        let kind = match keyword {
            K::GetKeyword if !is_event => K::GetAccessorDeclaration,
            K::SetKeyword if !is_event => K::SetAccessorDeclaration,
            K::InitKeyword if !is_event => K::InitAccessorDeclaration,
            K::AddKeyword if is_event => K::AddAccessorDeclaration,
            K::RemoveKeyword if is_event => K::RemoveAccessorDeclaration,
            _ => K::UnknownAccessorDeclaration,
        };
        if kind == K::UnknownAccessorDeclaration {
            let code = if is_event { ErrorCode::CS1055 } else { ErrorCode::CS1014 };
            if self.at(K::IdentifierToken) {
                let name = self.bump();
                self.report_error(Diagnostic::new(code, name.span()));
                b.push(name);
            } else {
                let span = self.cursor.expected_span();
                self.report_error(Diagnostic::new(code, span));
                b.push(self.missing(K::IdentifierToken));
            }
        } else {
            let token = self.bump_as(keyword);
            if kind == K::InitAccessorDeclaration {
                self.require_feature(Feature::InitOnlySetters, token.span());
            }
            b.push(token);
        }
        match self.kind() {
            K::OpenBraceToken => b.push(self.in_function_body(false, Parser::parse_block)),
            K::EqualsGreaterThanToken => {
                b.push(self.parse_arrow_expression_clause(false));
                b.push(self.expect(K::SemicolonToken));
            }
            K::SemicolonToken => b.push(self.bump()),
            _ if kind != K::UnknownAccessorDeclaration => {
                let span = self.cursor.expected_span();
                self.report_error(Diagnostic::new(ErrorCode::CS1043, span));
            }
            _ => {}
        }
        self.finish(b, kind)
    }
}
