//! Statements.
//!
//! Keyword statements are dispatched on their first token. Everything else
//! is a local declaration, a local function or an expression statement, as
//! decided in `local`.

mod local;

use sable_diagnostic::ErrorCode;
use sable_ir::SyntaxKind;
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::disambiguate::{self, LocalKind};
use crate::parser::Parser;
use crate::progress::Progress;
use crate::recovery::{
    recovery_action, RecoveryAction, TokenSet, EXPRESSION_START, STATEMENT_START,
};

use SyntaxKind as K;

/// Tokens that end a statement list because they can only continue an
/// enclosing member or type declaration.
const BLOCK_BAIL: TokenSet = TokenSet::of(&[
    K::CloseBraceToken,
    K::ClassKeyword,
    K::StructKeyword,
    K::InterfaceKeyword,
    K::EnumKeyword,
    K::NamespaceKeyword,
    K::EventKeyword,
    K::PublicKeyword,
    K::PrivateKeyword,
    K::ProtectedKeyword,
    K::InternalKeyword,
    K::OverrideKeyword,
    K::AbstractKeyword,
    K::VirtualKeyword,
    K::SealedKeyword,
]);

const SWITCH_SECTION_END: TokenSet = TokenSet::of(&[K::CaseKeyword, K::CloseBraceToken]);

impl Parser<'_> {
    /// `{ statements }`
    pub(crate) fn parse_block(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.expect(K::OpenBraceToken));
        self.parse_statements(&mut b, false);
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, K::Block)
    }

    /// Statements up to `}`, a member-level token, or (inside a switch
    /// section) the next label.
    fn parse_statements(&mut self, b: &mut NodeBuilder, in_switch_section: bool) {
        let terminators = if in_switch_section {
            BLOCK_BAIL.union(SWITCH_SECTION_END)
        } else {
            BLOCK_BAIL
        };
        while !self.at_eof() {
            if in_switch_section && self.at_switch_label() {
                return;
            }
            match recovery_action(self.kind(), STATEMENT_START, terminators) {
                RecoveryAction::Bail => return,
                RecoveryAction::Skip => {
                    let resync = STATEMENT_START.union(terminators);
                    b.push_opt(self.skip_until(resync, ErrorCode::CS1073));
                    continue;
                }
                RecoveryAction::Synthesize => {}
            }
            let start = self.position();
            b.push(self.parse_statement());
            if Progress::since(start, self.position()).none() {
                b.push_opt(self.skip_token(ErrorCode::CS1073));
            }
        }
    }

    pub(crate) fn parse_statement(&mut self) -> SyntaxNode {
        sable_stack::ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> SyntaxNode {
        match self.kind() {
            K::OpenBraceToken => self.parse_block(),
            K::SemicolonToken => {
                let semicolon = self.bump();
                self.wrap(semicolon, K::EmptyStatement)
            }
            K::IfKeyword => self.parse_if_statement(),
            K::WhileKeyword => self.parse_while_statement(),
            K::DoKeyword => self.parse_do_statement(),
            K::ForKeyword => self.parse_for_statement(),
            K::ForEachKeyword => {
                let b = self.start();
                self.parse_foreach_statement(b)
            }
            K::SwitchKeyword => self.parse_switch_statement(),
            K::BreakKeyword => self.parse_keyword_statement(K::BreakStatement),
            K::ContinueKeyword => self.parse_keyword_statement(K::ContinueStatement),
            K::GotoKeyword => self.parse_goto_statement(),
            K::ReturnKeyword => self.parse_optional_expression_statement(K::ReturnStatement),
            K::ThrowKeyword => self.parse_optional_expression_statement(K::ThrowStatement),
            K::TryKeyword => self.parse_try_statement(),
            K::LockKeyword => self.parse_lock_statement(),
            K::FixedKeyword => self.parse_fixed_statement(),
            K::UsingKeyword => {
                let b = self.start();
                self.parse_using_statement(b)
            }
            K::CheckedKeyword if self.nth(1) == K::OpenBraceToken => {
                self.parse_block_statement(K::CheckedStatement)
            }
            K::UncheckedKeyword if self.nth(1) == K::OpenBraceToken => {
                self.parse_block_statement(K::UncheckedStatement)
            }
            K::UnsafeKeyword if self.nth(1) == K::OpenBraceToken => {
                self.parse_block_statement(K::UnsafeStatement)
            }
            K::IdentifierToken => self.parse_identifier_statement(),
            _ => self.parse_local_or_expression_statement(),
        }
    }

    /// Statements introduced by an identifier: labels, `yield`, `await`
    /// forms, and the general local-or-expression case.
    fn parse_identifier_statement(&mut self) -> SyntaxNode {
        if self.nth(1) == K::ColonToken {
            let mut b = self.start();
            b.push(self.bump());
            b.push(self.bump());
            b.push(self.parse_statement());
            return self.finish(b, K::LabeledStatement);
        }
        if self.at_contextual(K::YieldKeyword)
            && matches!(self.nth(1), K::ReturnKeyword | K::BreakKeyword)
        {
            return self.parse_yield_statement();
        }
        if self.at_contextual(K::AwaitKeyword) {
            match self.nth(1) {
                K::ForEachKeyword | K::UsingKeyword => {
                    let mut b = self.start();
                    let await_kw = self.bump_as(K::AwaitKeyword);
                    self.require_feature(Feature::AsyncStreams, await_kw.span());
                    b.push(await_kw);
                    return if self.at(K::UsingKeyword) {
                        self.parse_using_statement(b)
                    } else {
                        self.parse_foreach_statement(b)
                    };
                }
                _ if self.context.in_async() => return self.parse_expression_statement(),
                _ => {}
            }
        }
        if disambiguate::is_query_start(self.cursor) {
            return self.parse_expression_statement();
        }
        self.parse_local_or_expression_statement()
    }

    pub(crate) fn parse_expression_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.parse_expression());
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, K::ExpressionStatement)
    }

    /// `keyword ;`
    fn parse_keyword_statement(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, kind)
    }

    /// `return [e] ;` and `throw [e] ;`
    fn parse_optional_expression_statement(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        if !self.at(K::SemicolonToken) {
            b.push(self.parse_expression());
        }
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, kind)
    }

    /// `checked { }`, `unchecked { }` and `unsafe { }`.
    fn parse_block_statement(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.parse_block());
        self.finish(b, kind)
    }

    /// `( expr )` pushed as three children.
    fn parse_parenthesized_condition(&mut self, b: &mut NodeBuilder) {
        b.push(self.expect(K::OpenParenToken));
        b.push(self.parse_expression());
        b.push(self.expect(K::CloseParenToken));
    }

    // ─── Selection and iteration ────────────────────────────────────────

    fn parse_if_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_parenthesized_condition(&mut b);
        b.push(self.parse_statement());
        if self.at(K::ElseKeyword) {
            let mut else_clause = self.start();
            else_clause.push(self.bump());
            else_clause.push(self.parse_statement());
            b.push(self.finish(else_clause, K::ElseClause));
        }
        self.finish(b, K::IfStatement)
    }

    fn parse_while_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_parenthesized_condition(&mut b);
        b.push(self.parse_statement());
        self.finish(b, K::WhileStatement)
    }

    fn parse_do_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.parse_statement());
        b.push(self.expect(K::WhileKeyword));
        self.parse_parenthesized_condition(&mut b);
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, K::DoStatement)
    }

    /// `for (init; condition; increments) body`
    fn parse_for_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.expect(K::OpenParenToken));
        if !self.at(K::SemicolonToken) {
            if disambiguate::classify_local(self.cursor) == LocalKind::Declaration {
                b.push(self.parse_variable_declaration());
            } else {
                self.parse_expression_list(&mut b, K::SemicolonToken);
            }
        }
        b.push(self.expect(K::SemicolonToken));
        if !self.at(K::SemicolonToken) {
            b.push(self.parse_expression());
        }
        b.push(self.expect(K::SemicolonToken));
        if !self.at(K::CloseParenToken) {
            self.parse_expression_list(&mut b, K::CloseParenToken);
        }
        b.push(self.expect(K::CloseParenToken));
        b.push(self.parse_statement());
        self.finish(b, K::ForStatement)
    }

    fn parse_expression_list(&mut self, b: &mut NodeBuilder, close: SyntaxKind) {
        let stop = TokenSet::new().with(K::SemicolonToken);
        self.parse_separated(b, close, EXPRESSION_START, stop, false, Parser::parse_expression);
    }

    /// `foreach (T x in e) body` or `foreach (var (a, b) in e) body`. `b`
    /// holds `await`, if present.
    fn parse_foreach_statement(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        b.push(self.bump());
        b.push(self.expect(K::OpenParenToken));
        let typed = self.try_parse(|p| {
            let ty = p.parse_type();
            let named = disambiguate::is_plain_identifier(&p.cursor, 0)
                && matches!(p.nth(1), K::InKeyword | K::CloseParenToken);
            named.then_some(ty)
        });
        let kind = match typed {
            Some(ty) => {
                b.push(ty);
                b.push(self.bump());
                K::ForEachStatement
            }
            None => {
                b.push(self.parse_expression());
                K::ForEachVariableStatement
            }
        };
        b.push(self.expect(K::InKeyword));
        b.push(self.parse_expression());
        b.push(self.expect(K::CloseParenToken));
        b.push(self.parse_statement());
        self.finish(b, kind)
    }

    // ─── Switch ─────────────────────────────────────────────────────────

    fn parse_switch_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        if self.at(K::OpenParenToken) {
            let governing = self.parse_expression();
            if governing.kind() == K::ParenthesizedExpression {
                let parts = self.dissolve(governing);
                b.extend(parts);
            } else {
                b.push(governing);
            }
        } else {
            self.report_expected(K::OpenParenToken);
            b.push(self.missing(K::OpenParenToken));
            b.push(self.parse_expression());
            b.push(self.missing(K::CloseParenToken));
        }
        b.push(self.expect(K::OpenBraceToken));
        while !self.at(K::CloseBraceToken) && !self.at_eof() {
            if self.at_switch_label() {
                b.push(self.parse_switch_section());
                continue;
            }
            let stop = SWITCH_SECTION_END.union(BLOCK_BAIL).with(K::DefaultKeyword);
            if self.at_set(BLOCK_BAIL) {
                break;
            }
            let start = self.position();
            b.push_opt(self.skip_until(stop, ErrorCode::CS1073));
            if Progress::since(start, self.position()).none() {
                b.push_opt(self.skip_token(ErrorCode::CS1073));
            }
        }
        b.push(self.expect(K::CloseBraceToken));
        self.finish(b, K::SwitchStatement)
    }

    fn at_switch_label(&self) -> bool {
        self.at(K::CaseKeyword) || (self.at(K::DefaultKeyword) && self.nth(1) == K::ColonToken)
    }

    fn parse_switch_section(&mut self) -> SyntaxNode {
        let mut b = self.start();
        while self.at_switch_label() {
            b.push(self.parse_switch_label());
        }
        self.parse_statements(&mut b, true);
        self.finish(b, K::SwitchSection)
    }

    /// `case constant:`, `case pattern [when e]:` or `default:`.
    fn parse_switch_label(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let keyword = self.bump();
        if keyword.kind == K::DefaultKeyword {
            b.push(keyword);
            b.push(self.expect(K::ColonToken));
            return self.finish(b, K::DefaultSwitchLabel);
        }
        b.push(keyword);
        let pattern = self.parse_pattern();
        let when = self.parse_when_clause();
        let kind = if pattern.kind() == K::ConstantPattern && when.is_none() {
            let value = self.unwrap_single(pattern);
            b.push(value);
            K::CaseSwitchLabel
        } else {
            b.push(pattern);
            b.push_opt(when);
            K::CasePatternSwitchLabel
        };
        b.push(self.expect(K::ColonToken));
        self.finish(b, kind)
    }

    // ─── Jumps ──────────────────────────────────────────────────────────

    /// `goto label;`, `goto case e;` or `goto default;`
    fn parse_goto_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        let kind = match self.kind() {
            K::CaseKeyword => {
                b.push(self.bump());
                b.push(self.parse_expression());
                K::GotoCaseStatement
            }
            K::DefaultKeyword => {
                b.push(self.bump());
                K::GotoDefaultStatement
            }
            _ => {
                b.push(self.expect_identifier());
                K::GotoStatement
            }
        };
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, kind)
    }

    /// `yield return e;` or `yield break;`
    fn parse_yield_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::YieldKeyword));
        let kind = if self.at(K::ReturnKeyword) {
            b.push(self.bump());
            b.push(self.parse_expression());
            K::YieldReturnStatement
        } else {
            b.push(self.bump());
            K::YieldBreakStatement
        };
        b.push(self.expect(K::SemicolonToken));
        self.finish(b, kind)
    }

    // ─── Exceptions and resources ───────────────────────────────────────

    /// `try { } catch (T e) when (f) { } finally { }`
    fn parse_try_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.parse_block());
        while self.at(K::CatchKeyword) {
            b.push(self.parse_catch_clause());
        }
        if self.at(K::FinallyKeyword) {
            let mut finally = self.start();
            finally.push(self.bump());
            finally.push(self.parse_block());
            b.push(self.finish(finally, K::FinallyClause));
        }
        self.finish(b, K::TryStatement)
    }

    fn parse_catch_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        if self.at(K::OpenParenToken) {
            let mut declaration = self.start();
            declaration.push(self.bump());
            declaration.push(self.parse_type());
            if self.at(K::IdentifierToken) {
                declaration.push(self.bump());
            }
            declaration.push(self.expect(K::CloseParenToken));
            b.push(self.finish(declaration, K::CatchDeclaration));
        }
        if self.at_contextual(K::WhenKeyword) {
            let mut filter = self.start();
            filter.push(self.bump_as(K::WhenKeyword));
            self.parse_parenthesized_condition(&mut filter);
            b.push(self.finish(filter, K::CatchFilterClause));
        }
        b.push(self.parse_block());
        self.finish(b, K::CatchClause)
    }

    fn parse_lock_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        self.parse_parenthesized_condition(&mut b);
        b.push(self.parse_statement());
        self.finish(b, K::LockStatement)
    }

    /// `fixed (T* p = &x) body`
    fn parse_fixed_statement(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        b.push(self.expect(K::OpenParenToken));
        b.push(self.parse_variable_declaration());
        b.push(self.expect(K::CloseParenToken));
        b.push(self.parse_statement());
        self.finish(b, K::FixedStatement)
    }

    /// `using (resource) body` or the declaration form `using var x = e;`.
    /// `b` holds `await`, if present.
    fn parse_using_statement(&mut self, mut b: NodeBuilder) -> SyntaxNode {
        let using = self.bump();
        if !self.at(K::OpenParenToken) {
            self.require_feature(Feature::UsingDeclarations, using.span());
            b.push(using);
            b.push(self.parse_variable_declaration());
            b.push(self.expect(K::SemicolonToken));
            return self.finish(b, K::LocalDeclarationStatement);
        }
        b.push(using);
        b.push(self.bump());
        if disambiguate::classify_local(self.cursor) == LocalKind::Declaration {
            b.push(self.parse_variable_declaration());
        } else {
            b.push(self.parse_expression());
        }
        b.push(self.expect(K::CloseParenToken));
        b.push(self.parse_statement());
        self.finish(b, K::UsingStatement)
    }
}
