//! Local declarations, local functions and expression statements.

use sable_ir::SyntaxKind;
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::cursor::Cursor;
use crate::disambiguate::{self, LocalKind};
use crate::parser::Parser;

use SyntaxKind as K;

impl Parser<'_> {
    /// A statement that starts with modifiers, a type or an expression.
    pub(super) fn parse_local_or_expression_statement(&mut self) -> SyntaxNode {
        let mut count = 0;
        while self.is_local_modifier(count) {
            count += 1;
        }
        match disambiguate::classify_local(self.lookahead_at(count)) {
            LocalKind::Declaration => {
                let mut b = self.start();
                self.parse_local_modifiers(&mut b, count);
                b.push(self.parse_variable_declaration());
                b.push(self.expect(K::SemicolonToken));
                self.finish(b, K::LocalDeclarationStatement)
            }
            LocalKind::LocalFunction => self.parse_local_function(count),
            LocalKind::Expression => self.parse_expression_statement(),
        }
    }

    /// A copy of the cursor `n` tokens ahead.
    fn lookahead_at(&self, n: usize) -> Cursor<'_> {
        let mut lookahead = self.cursor;
        lookahead.set_position(self.position() + n);
        lookahead
    }

    /// Is the token `n` ahead a modifier of a local declaration or local
    /// function, rather than the start of its type or an expression?
    fn is_local_modifier(&self, n: usize) -> bool {
        match self.nth(n) {
            K::ConstKeyword | K::ReadOnlyKeyword | K::VolatileKeyword | K::ExternKeyword => true,
            K::UnsafeKeyword => self.nth(n + 1) != K::OpenBraceToken,
            K::StaticKeyword => !disambiguate::is_lambda_after_modifiers(self.lookahead_at(n)),
            K::IdentifierToken => {
                let follows_modifier = self.nth(n + 1).is_modifier_keyword()
                    || disambiguate::is_type_then_name(self.lookahead_at(n + 1));
                if self.nth_contextual(n, K::AsyncKeyword) {
                    follows_modifier
                } else if self.nth_contextual(n, K::ScopedKeyword) {
                    self.nth(n + 1) == K::RefKeyword || follows_modifier
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Consume `count` modifiers into `b`. Returns whether `async` was
    /// among them.
    fn parse_local_modifiers(&mut self, b: &mut NodeBuilder, count: usize) -> bool {
        let mut is_async = false;
        for _ in 0..count {
            let token = if self.at_contextual(K::AsyncKeyword) {
                is_async = true;
                self.bump_as(K::AsyncKeyword)
            } else if self.at_contextual(K::ScopedKeyword) {
                self.bump_as(K::ScopedKeyword)
            } else {
                self.bump()
            };
            if token.kind == K::StaticKeyword {
                self.require_feature(Feature::StaticLocalFunctions, token.span());
            }
            b.push(token);
        }
        is_async
    }

    /// `T a = 1, b` without the terminator.
    pub(crate) fn parse_variable_declaration(&mut self) -> SyntaxNode {
        let ty = self.parse_type();
        self.finish_variable_declaration(ty)
    }

    /// The declarators of a variable declaration whose type is parsed.
    pub(crate) fn finish_variable_declaration(&mut self, ty: SyntaxNode) -> SyntaxNode {
        let mut b = self.start_with(ty);
        b.push(self.parse_variable_declarator());
        while let Some(comma) = self.eat(K::CommaToken) {
            b.push(comma);
            b.push(self.parse_variable_declarator());
        }
        self.finish(b, K::VariableDeclaration)
    }

    /// `name [= initializer]`. A bracketed size after the name is kept for
    /// fixed-size buffers.
    pub(crate) fn parse_variable_declarator(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.expect_identifier());
        if self.at(K::OpenBracketToken) {
            b.push(self.parse_bracketed_argument_list());
        }
        if self.at(K::EqualsToken) {
            b.push(self.parse_equals_value_clause());
        }
        self.finish(b, K::VariableDeclarator)
    }

    /// `= value`, where the value may be an array initializer.
    pub(crate) fn parse_equals_value_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.parse_variable_initializer());
        self.finish(b, K::EqualsValueClause)
    }

    /// `[modifiers] T f<U>(params) where ... body`
    fn parse_local_function(&mut self, modifier_count: usize) -> SyntaxNode {
        let mut b = self.start();
        let is_async = self.parse_local_modifiers(&mut b, modifier_count);
        let return_type_span = self.current().span();
        self.require_feature(Feature::LocalFunctions, return_type_span);
        b.push(self.parse_type());
        b.push(self.expect_identifier());
        if self.at(K::LessThanToken) {
            b.push(self.parse_type_parameter_list());
        }
        b.push(self.parse_parameter_list(false));
        self.parse_constraint_clauses(&mut b);
        self.parse_function_body(&mut b, is_async);
        self.finish(b, K::LocalFunctionStatement)
    }
}
