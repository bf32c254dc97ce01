//! Parameter lists.

use sable_ir::SyntaxKind;
use sable_syntax::SyntaxNode;

use crate::disambiguate;
use crate::parser::Parser;
use crate::recovery::{TokenSet, PREDEFINED_TYPES};

use SyntaxKind as K;

const PARAMETER_START: TokenSet = TokenSet::of(&[
    K::IdentifierToken,
    K::OpenBracketToken,
    K::OpenParenToken,
    K::RefKeyword,
    K::OutKeyword,
    K::InKeyword,
    K::ParamsKeyword,
    K::ThisKeyword,
    K::ArgListKeyword,
])
.union(PREDEFINED_TYPES);

impl Parser<'_> {
    /// `( parameters )`. With `implicit`, as in lambdas, a parameter may
    /// be a bare name.
    pub(crate) fn parse_parameter_list(&mut self, implicit: bool) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.expect(K::OpenParenToken));
        self.parse_separated(
            &mut b,
            K::CloseParenToken,
            PARAMETER_START,
            TokenSet::new(),
            false,
            |p| p.parse_parameter(implicit),
        );
        b.push(self.expect(K::CloseParenToken));
        self.finish(b, K::ParameterList)
    }

    /// `[ parameters ]` of an indexer.
    pub(crate) fn parse_bracketed_parameter_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.expect(K::OpenBracketToken));
        self.parse_separated(
            &mut b,
            K::CloseBracketToken,
            PARAMETER_START,
            TokenSet::new(),
            false,
            |p| p.parse_parameter(false),
        );
        b.push(self.expect(K::CloseBracketToken));
        self.finish(b, K::BracketedParameterList)
    }

    /// `[attrs] [modifiers] [type] name [= default]`, or `__arglist`.
    fn parse_parameter(&mut self, implicit: bool) -> SyntaxNode {
        let mut b = self.start();
        if self.at(K::ArgListKeyword) {
            b.push(self.bump());
            return self.finish(b, K::Parameter);
        }
        self.parse_attribute_lists(&mut b);
        loop {
            match self.kind() {
                K::RefKeyword | K::OutKeyword | K::InKeyword | K::ParamsKeyword | K::ThisKeyword => {
                    b.push(self.bump());
                }
                K::ReadOnlyKeyword if self.cursor.previous().is_some_and(|t| t.kind == K::RefKeyword) => {
                    b.push(self.bump());
                }
                K::IdentifierToken if self.at_scoped_modifier() => {
                    b.push(self.bump_as(K::ScopedKeyword));
                }
                _ => break,
            }
        }
        let bare_name = implicit
            && self.at(K::IdentifierToken)
            && matches!(self.nth(1), K::CommaToken | K::CloseParenToken);
        if !bare_name {
            b.push(self.parse_type());
        }
        b.push(self.expect_identifier());
        if self.at(K::EqualsToken) {
            b.push(self.parse_equals_value_clause());
        }
        self.finish(b, K::Parameter)
    }

    /// `scoped` before `ref` or before a type and name.
    fn at_scoped_modifier(&self) -> bool {
        if !self.at_contextual(K::ScopedKeyword) {
            return false;
        }
        let mut lookahead = self.cursor;
        lookahead.advance();
        lookahead.check(K::RefKeyword) || disambiguate::is_type_then_name(lookahead)
    }
}
