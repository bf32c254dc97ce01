//! Compilation units, namespaces, directives and attributes.
//!
//! A compilation unit holds, in order, `extern alias` directives, using
//! directives, global attributes and then members. Top-level statements
//! are allowed among the members and become `GlobalStatement`s.

mod members;
mod modifiers;
mod params;
mod types;

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::SyntaxKind;
use sable_options::{Feature, SourceCodeKind};
use sable_syntax::{SyntaxNode, Token};

use crate::builder::NodeBuilder;
use crate::context::ParseContext;
use crate::disambiguate::{self, LocalKind};
use crate::parser::Parser;
use crate::progress::Progress;
use crate::recovery::{TokenSet, EXPRESSION_START, MEMBER_START, STATEMENT_START};

use SyntaxKind as K;

/// Tokens at which skipping between members stops.
const NAMESPACE_RESYNC: TokenSet = MEMBER_START.union(TokenSet::of(&[
    K::UsingKeyword,
    K::ExternKeyword,
    K::NamespaceKeyword,
]));

/// Modifiers that only a member can carry, never a local declaration.
const MEMBER_ONLY_MODIFIERS: TokenSet = TokenSet::of(&[
    K::PublicKeyword,
    K::PrivateKeyword,
    K::ProtectedKeyword,
    K::InternalKeyword,
    K::AbstractKeyword,
    K::VirtualKeyword,
    K::OverrideKeyword,
    K::SealedKeyword,
    K::PartialKeyword,
    K::RequiredKeyword,
    K::FileKeyword,
]);

/// Which body a member list belongs to.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Body {
    CompilationUnit,
    Namespace,
    FileScopedNamespace,
}

/// What has been seen so far in a compilation unit.
#[derive(Default)]
struct UnitState {
    seen_member: bool,
    seen_type_or_namespace: bool,
    reported_top_level: bool,
}

impl Parser<'_> {
    /// The whole token stream as a `CompilationUnit`. The root claims every
    /// diagnostic no narrower node did.
    pub(crate) fn parse_compilation_unit(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let mut state = UnitState::default();
        self.parse_namespace_body(&mut b, &mut state, Body::CompilationUnit);
        debug_assert!(self.at_eof(), "compilation unit stops only at end of file");
        b.push(self.bump());
        let node = self.finish(b, K::CompilationUnit);
        let rest = self.diagnostics.take_all();
        node.with_diagnostics(rest)
    }

    fn parse_namespace_body(&mut self, b: &mut NodeBuilder, state: &mut UnitState, body: Body) {
        loop {
            if self.at_eof() || (body == Body::Namespace && self.at(K::CloseBraceToken)) {
                return;
            }
            let start = self.position();
            match self.kind() {
                K::ExternKeyword if self.nth_contextual(1, K::AliasKeyword) => {
                    b.push(self.parse_extern_alias_directive());
                }
                K::UsingKeyword if self.using_is_directive(0) => {
                    let directive = self.parse_using_directive(state);
                    b.push(directive);
                }
                K::IdentifierToken
                    if self.at_contextual(K::GlobalKeyword)
                        && self.nth(1) == K::UsingKeyword
                        && self.using_is_directive(1) =>
                {
                    let directive = self.parse_using_directive(state);
                    b.push(directive);
                }
                K::NamespaceKeyword => {
                    b.push(self.parse_namespace_declaration(state));
                }
                K::OpenBracketToken if self.at_global_attribute() => {
                    b.push(self.parse_attribute_list());
                }
                _ if body == Body::CompilationUnit && self.at_global_statement() => {
                    b.push(self.parse_global_statement(state));
                }
                _ if self.at_set(MEMBER_START) => {
                    state.seen_member = true;
                    let member = self.parse_member_declaration();
                    if is_type_declaration(member.kind()) {
                        state.seen_type_or_namespace = true;
                    }
                    b.push(member);
                }
                _ => {
                    let resync = if body == Body::Namespace {
                        NAMESPACE_RESYNC.with(K::CloseBraceToken)
                    } else {
                        NAMESPACE_RESYNC
                    };
                    b.push_opt(self.skip_until(resync, ErrorCode::CS1022));
                }
            }
            if Progress::since(start, self.position()).none() {
                b.push_opt(self.skip_token(ErrorCode::CS1022));
            }
        }
    }

    // ─── Directives ─────────────────────────────────────────────────────

    /// Is the `using` `n` ahead a directive rather than a using statement or
    /// using declaration?
    fn using_is_directive(&self, n: usize) -> bool {
        if self.nth(n + 1) == K::OpenParenToken {
            return false;
        }
        let mut lookahead = self.cursor;
        lookahead.set_position(self.position() + n + 1);
        disambiguate::classify_local(lookahead) != LocalKind::Declaration
    }

    /// `[global] using [static] [alias =] name;`
    fn parse_using_directive(&mut self, state: &UnitState) -> SyntaxNode {
        let mut b = self.start();
        let first = self.current().span();
        if let Some(global) = self.eat_contextual(K::GlobalKeyword) {
            self.require_feature(Feature::GlobalUsingDirective, global.span());
            b.push(global);
        }
        b.push(self.bump());
        if state.seen_member {
            self.report(Diagnostic::new(ErrorCode::CS1529, first));
        }
        b.push_opt(self.eat(K::StaticKeyword));
        if self.at(K::IdentifierToken) && self.nth(1) == K::EqualsToken {
            b.push(self.parse_name_equals());
            b.push(self.parse_type());
        } else if self.at(K::IdentifierToken) {
            b.push(self.parse_name());
        } else {
            b.push(self.parse_type());
        }
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, K::UsingDirective)
    }

    /// `extern alias name;`
    fn parse_extern_alias_directive(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.bump_as(K::AliasKeyword));
        b.push(self.expect_identifier());
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, K::ExternAliasDirective)
    }

    // ─── Namespaces ─────────────────────────────────────────────────────

    /// `namespace N { ... }` or, file-scoped, `namespace N; ...`
    fn parse_namespace_declaration(&mut self, state: &mut UnitState) -> SyntaxNode {
        state.seen_member = true;
        state.seen_type_or_namespace = true;
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.parse_name());
        if let Some(semicolon) = self.eat(K::SemicolonToken) {
            self.require_feature(Feature::FileScopedNamespace, semicolon.span());
            b.push(semicolon);
            let mut inner = UnitState::default();
            self.parse_namespace_body(&mut b, &mut inner, Body::FileScopedNamespace);
            return self.finish(b, K::FileScopedNamespaceDeclaration);
        }
        b.push(self.expect(K::OpenBraceToken));
        let mut inner = UnitState::default();
        self.parse_namespace_body(&mut b, &mut inner, Body::Namespace);
        b.push(self.expect(K::CloseBraceToken));
        b.push_opt(self.eat(K::SemicolonToken));
        self.finish(b, K::NamespaceDeclaration)
    }

    // ─── Top-level statements ───────────────────────────────────────────

    /// Does the compilation unit continue with a statement rather than a
    /// member? Members are recognised by attributes, member-only
    /// modifiers, or a type declaration keyword after the modifiers.
    fn at_global_statement(&self) -> bool {
        if self.at(K::OpenBracketToken) && !self.at_collection_statement() {
            return false;
        }
        let mut n = 0;
        while let Some(kind) = self.modifier_at(n) {
            if MEMBER_ONLY_MODIFIERS.contains(kind) {
                return false;
            }
            n += 1;
        }
        if self.type_declaration_at(n) {
            return false;
        }
        if matches!(
            self.nth(n),
            K::EventKeyword | K::ImplicitKeyword | K::ExplicitKeyword | K::TildeToken
        ) {
            return false;
        }
        n > 0 || self.at_set(STATEMENT_START)
    }

    /// `[` beginning a collection expression statement, such as `[a, b].M();`.
    fn at_collection_statement(&self) -> bool {
        disambiguate::skip_balanced(self.cursor)
            .is_some_and(|after| matches!(after.current_kind(), K::DotToken | K::SemicolonToken))
    }

    fn parse_global_statement(&mut self, state: &mut UnitState) -> SyntaxNode {
        let span = self.current().span();
        if self.options().kind() == SourceCodeKind::Regular && !state.reported_top_level {
            state.reported_top_level = true;
            self.require_feature(Feature::TopLevelStatements, span);
            if state.seen_type_or_namespace {
                self.report(Diagnostic::new(ErrorCode::CS8803, span));
            }
        }
        state.seen_member = true;
        let statement = self.with_context(ParseContext::IN_ASYNC, Parser::parse_statement);
        self.wrap(statement, K::GlobalStatement)
    }

    // ─── Attributes ─────────────────────────────────────────────────────

    /// `[assembly: ...]` or `[module: ...]`
    fn at_global_attribute(&self) -> bool {
        self.nth(2) == K::ColonToken
            && (self.nth_contextual(1, K::AssemblyKeyword)
                || self.nth_contextual(1, K::ModuleKeyword))
    }

    /// Zero or more attribute lists, pushed into `b`.
    pub(crate) fn parse_attribute_lists(&mut self, b: &mut NodeBuilder) {
        while self.at(K::OpenBracketToken) {
            b.push(self.parse_attribute_list());
        }
    }

    /// `[target: A, B(args)]`
    fn parse_attribute_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        if self.nth(1) == K::ColonToken {
            if let Some(target) = self.attribute_target() {
                let mut specifier = self.start();
                specifier.push(target);
                specifier.push(self.bump());
                b.push(self.finish(specifier, K::AttributeTargetSpecifier));
            }
        }
        self.parse_separated(
            &mut b,
            K::CloseBracketToken,
            TokenSet::of(&[K::IdentifierToken]),
            TokenSet::new(),
            true,
            Parser::parse_attribute,
        );
        b.push(self.expect(K::CloseBracketToken));
        self.finish(b, K::AttributeList)
    }

    /// The target keyword of an attribute list, when the current token is one.
    fn attribute_target(&mut self) -> Option<Token> {
        match self.kind() {
            K::ReturnKeyword | K::EventKeyword => Some(self.bump()),
            K::IdentifierToken => {
                let kind = self.current().contextual_kind;
                let target = matches!(
                    kind,
                    K::AssemblyKeyword
                        | K::ModuleKeyword
                        | K::FieldKeyword
                        | K::MethodKeyword
                        | K::ParamKeyword
                        | K::PropertyKeyword
                        | K::TypeKeyword
                        | K::TypeVarKeyword
                );
                Some(if target { self.bump_as(kind) } else { self.bump() })
            }
            _ => None,
        }
    }

    fn parse_attribute(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.parse_name());
        if self.at(K::OpenParenToken) {
            b.push(self.parse_attribute_argument_list());
        }
        self.finish(b, K::Attribute)
    }

    /// `( [name =] expr, [name:] expr )`
    fn parse_attribute_argument_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_separated(
            &mut b,
            K::CloseParenToken,
            EXPRESSION_START,
            TokenSet::new(),
            false,
            |p| {
                let mut argument = p.start();
                if p.at(K::IdentifierToken) {
                    match p.nth(1) {
                        K::EqualsToken => argument.push(p.parse_name_equals()),
                        K::ColonToken => argument.push(p.parse_name_colon()),
                        _ => {}
                    }
                }
                argument.push(p.parse_expression());
                p.finish(argument, K::AttributeArgument)
            },
        );
        b.push(self.expect(K::CloseParenToken));
        self.finish(b, K::AttributeArgumentList)
    }
}

fn is_type_declaration(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        K::ClassDeclaration
            | K::StructDeclaration
            | K::InterfaceDeclaration
            | K::RecordDeclaration
            | K::RecordStructDeclaration
            | K::EnumDeclaration
            | K::DelegateDeclaration
    )
}
