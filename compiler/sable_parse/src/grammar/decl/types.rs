//! Type declarations: classes, structs, interfaces, records, enums and
//! delegates, with their type parameters, base lists and constraints.

use sable_ir::SyntaxKind;
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::grammar::decl::modifiers::Modifiers;
use crate::parser::Parser;
use crate::recovery::TokenSet;

use SyntaxKind as K;

impl Parser<'_> {
    /// Does a type declaration start at the token `n` ahead, once
    /// attributes and modifiers are behind?
    pub(crate) fn type_declaration_at(&self, n: usize) -> bool {
        match self.nth(n) {
            K::ClassKeyword | K::StructKeyword | K::InterfaceKeyword | K::EnumKeyword => true,
            K::DelegateKeyword => {
                !matches!(self.nth(n + 1), K::OpenParenToken | K::OpenBraceToken)
            }
            K::IdentifierToken => {
                self.nth_contextual(n, K::RecordKeyword)
                    && matches!(
                        self.nth(n + 1),
                        K::IdentifierToken | K::ClassKeyword | K::StructKeyword
                    )
            }
            _ => false,
        }
    }

    /// A type declaration whose attributes and modifiers are already in `b`.
    pub(crate) fn parse_type_declaration(&mut self, b: NodeBuilder, modifiers: Modifiers) -> SyntaxNode {
        match self.kind() {
            K::ClassKeyword => self.parse_class_like(b, K::ClassDeclaration),
            K::StructKeyword => self.parse_class_like(b, K::StructDeclaration),
            K::InterfaceKeyword => self.parse_class_like(b, K::InterfaceDeclaration),
            K::EnumKeyword => {
                self.reject_partial(modifiers);
                self.parse_enum_declaration(b)
            }
            K::DelegateKeyword => {
                self.reject_partial(modifiers);
                self.parse_delegate_declaration(b)
            }
            _ => self.parse_record_declaration(b),
        }
    }

    /// `class C<T>(params) : Base where T : new() { members }`
    fn parse_class_like(&mut self, mut b: NodeBuilder, kind: SyntaxKind) -> SyntaxNode {
        b.push(self.bump());
        b.push(self.expect_identifier());
        if self.at(K::LessThanToken) {
            b.push(self.parse_type_parameter_list());
        }
        if self.at(K::OpenParenToken) && kind != K::InterfaceDeclaration {
            let span = self.current().span();
            self.require_feature(Feature::PrimaryConstructors, span);
            b.push(self.parse_parameter_list(false));
        }
        self.finish_type_declaration(b, kind)
    }

    /// `record [class|struct] R(params) ...`
    fn parse_record_declaration(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        let record = self.bump_as(K::RecordKeyword);
        self.require_feature(Feature::Records, record.span());
        b.push(record);
        let kind = match self.kind() {
            K::StructKeyword => {
                let keyword = self.bump();
                self.require_feature(Feature::RecordStructs, keyword.span());
                b.push(keyword);
                K::RecordStructDeclaration
            }
            K::ClassKeyword => {
                b.push(self.bump());
                K::RecordDeclaration
            }
            _ => K::RecordDeclaration,
        };
        b.push(self.expect_identifier());
        if self.at(K::LessThanToken) {
            b.push(self.parse_type_parameter_list());
        }
        if self.at(K::OpenParenToken) {
            b.push(self.parse_parameter_list(false));
        }
        self.finish_type_declaration(b, kind)
    }

    /// Base list, constraints and body shared by every class-like type.
    /// A `;` may replace the body.
    fn finish_type_declaration(&mut self, mut b: NodeBuilder, kind: SyntaxKind) -> SyntaxNode {
        if self.at(K::ColonToken) {
            b.push(self.parse_base_list());
        }
        self.parse_constraint_clauses(&mut b);
        if let Some(semicolon) = self.eat(K::SemicolonToken) {
            b.push(semicolon);
            return self.finish(b, kind);
        }
        b.push(self.expect(K::OpenBraceToken));
        self.parse_type_members(&mut b);
        b.push(self.expect(K::CloseBraceToken));
        b.push_opt(self.eat(K::SemicolonToken));
        self.finish(b, kind)
    }

    /// `: Base(args), IFace`
    fn parse_base_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        loop {
            let ty = self.parse_type();
            let base = if self.at(K::OpenParenToken) {
                let mut base = self.start_with(ty);
                base.push(self.parse_argument_list());
                self.finish(base, K::PrimaryConstructorBaseType)
            } else {
                self.wrap(ty, K::SimpleBaseType)
            };
            b.push(base);
            match self.eat(K::CommaToken) {
                Some(comma) => b.push(comma),
                None => break,
            }
        }
        self.finish(b, K::BaseList)
    }

    /// `enum E : byte { A, B = 2, }`
    fn parse_enum_declaration(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        b.push(self.bump());
        b.push(self.expect_identifier());
        if self.at(K::ColonToken) {
            b.push(self.parse_base_list());
        }
        b.push(self.expect(K::OpenBraceToken));
        self.parse_separated(
            &mut b,
            K::CloseBraceToken,
            TokenSet::of(&[K::IdentifierToken, K::OpenBracketToken]),
            TokenSet::new(),
            true,
            Parser::parse_enum_member,
        );
        b.push(self.expect(K::CloseBraceToken));
        b.push_opt(self.eat(K::SemicolonToken));
        self.finish(b, K::EnumDeclaration)
    }

    fn parse_enum_member(&mut self) -> SyntaxNode {
        let mut b = self.start();
        self.parse_attribute_lists(&mut b);
        b.push(self.expect_identifier());
        if self.at(K::EqualsToken) {
            b.push(self.parse_equals_value_clause());
        }
        self.finish(b, K::EnumMemberDeclaration)
    }

    /// `delegate R D<T>(params) where ...;`
    fn parse_delegate_declaration(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        b.push(self.bump());
        b.push(self.parse_type());
        b.push(self.expect_identifier());
        if self.at(K::LessThanToken) {
            b.push(self.parse_type_parameter_list());
        }
        b.push(self.parse_parameter_list(false));
        self.parse_constraint_clauses(&mut b);
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, K::DelegateDeclaration)
    }

    // ─── Type parameters ────────────────────────────────────────────────

    /// `<[attrs] [in|out] T, ...>`
    pub(crate) fn parse_type_parameter_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_separated(
            &mut b,
            K::GreaterThanToken,
            TokenSet::of(&[K::IdentifierToken, K::OpenBracketToken, K::InKeyword, K::OutKeyword]),
            TokenSet::of(&[K::OpenParenToken, K::OpenBraceToken]),
            false,
            |p| {
                let mut parameter = p.start();
                p.parse_attribute_lists(&mut parameter);
                if matches!(p.kind(), K::InKeyword | K::OutKeyword) {
                    parameter.push(p.bump());
                }
                parameter.push(p.expect_identifier());
                p.finish(parameter, K::TypeParameter)
            },
        );
        b.push(self.expect(K::GreaterThanToken));
        self.finish(b, K::TypeParameterList)
    }

    /// Zero or more `where T : constraints` clauses, pushed into `b`.
    pub(crate) fn parse_constraint_clauses(&mut self, b: &mut NodeBuilder) {
        while self.at_contextual(K::WhereKeyword) {
            let mut clause = self.start();
            clause.push(self.bump_as(K::WhereKeyword));
            let name = self.expect_identifier();
            clause.push(self.wrap(name, K::IdentifierName));
            clause.push(self.expect(K::ColonToken));
            loop {
                clause.push(self.parse_type_parameter_constraint());
                match self.eat(K::CommaToken) {
                    Some(comma) => clause.push(comma),
                    None => break,
                }
            }
            b.push(self.finish(clause, K::TypeParameterConstraintClause));
        }
    }

    fn parse_type_parameter_constraint(&mut self) -> SyntaxNode {
        let mut b = self.start();
        match self.kind() {
            K::NewKeyword => {
                b.push(self.bump());
                b.push(self.expect(K::OpenParenToken));
                b.push(self.expect(K::CloseParenToken));
                self.finish(b, K::ConstructorConstraint)
            }
            K::ClassKeyword => {
                b.push(self.bump());
                b.push_opt(self.eat(K::QuestionToken));
                self.finish(b, K::ClassConstraint)
            }
            K::StructKeyword => {
                b.push(self.bump());
                self.finish(b, K::StructConstraint)
            }
            K::DefaultKeyword => {
                b.push(self.bump());
                self.finish(b, K::DefaultConstraint)
            }
            _ => {
                b.push(self.parse_type());
                self.finish(b, K::TypeConstraint)
            }
        }
    }
}
