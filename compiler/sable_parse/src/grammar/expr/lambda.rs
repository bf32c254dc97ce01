//! Lambdas and anonymous methods.

use sable_ir::SyntaxKind;
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::builder::NodeBuilder;
use crate::context::ParseContext;
use crate::parser::Parser;

use SyntaxKind as K;

impl Parser<'_> {
    /// `async`/`static` followed by a lambda or anonymous method.
    pub(super) fn parse_lambda_with_modifiers(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let mut is_async = false;
        loop {
            if self.at_contextual(K::AsyncKeyword) {
                is_async = true;
                b.push(self.bump_as(K::AsyncKeyword));
            } else if self.at(K::StaticKeyword) {
                let token = self.bump();
                self.require_feature(Feature::StaticAnonymousFunctions, token.span());
                b.push(token);
            } else {
                break;
            }
        }
        match self.kind() {
            K::DelegateKeyword => self.parse_anonymous_method(b, is_async),
            K::OpenParenToken => self.parse_parenthesized_lambda(b, is_async),
            _ => self.parse_simple_lambda(b, is_async),
        }
    }

    /// `x => body`, after any modifiers already in `b`.
    pub(super) fn parse_simple_lambda(&mut self, mut b: NodeBuilder, is_async: bool) -> SyntaxNode {
        let name = self.expect_identifier();
        b.push(self.wrap(name, K::Parameter));
        b.push(self.expect(K::EqualsGreaterThanToken));
        b.push(self.parse_lambda_body(is_async));
        self.finish(b, K::SimpleLambdaExpression)
    }

    /// `(a, int b) => body`
    pub(super) fn parse_parenthesized_lambda(
        &mut self,
        mut b: NodeBuilder,
        is_async: bool,
    ) -> SyntaxNode {
        b.push(self.parse_parameter_list(true));
        b.push(self.expect(K::EqualsGreaterThanToken));
        b.push(self.parse_lambda_body(is_async));
        self.finish(b, K::ParenthesizedLambdaExpression)
    }

    /// `delegate (params) { ... }`; the parameter list is optional.
    pub(super) fn parse_anonymous_method(&mut self, mut b: NodeBuilder, is_async: bool) -> SyntaxNode {
        b.push(self.bump());
        if self.at(K::OpenParenToken) {
            b.push(self.parse_parameter_list(false));
        }
        b.push(self.in_function_body(is_async, Parser::parse_block));
        self.finish(b, K::AnonymousMethodExpression)
    }

    fn parse_lambda_body(&mut self, is_async: bool) -> SyntaxNode {
        if self.at(K::OpenBraceToken) {
            return self.in_function_body(is_async, Parser::parse_block);
        }
        self.in_function_body(is_async, Parser::parse_expression)
    }

    /// Run `f` in a fresh function context: async only when `is_async`, and
    /// never inside a query.
    pub(crate) fn in_function_body<T>(
        &mut self,
        is_async: bool,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.without_context(ParseContext::IN_QUERY.with(ParseContext::IN_ASYNC), |p| {
            if is_async {
                p.with_context(ParseContext::IN_ASYNC, f)
            } else {
                f(p)
            }
        })
    }
}
