//! Query expressions.
//!
//! ```text
//! query        = from_clause body
//! body         = { from | let | where | join | orderby } (select | group) [continuation]
//! continuation = "into" identifier body
//! ```
//!
//! Every clause keyword is contextual. Clause expressions are parsed with
//! `IN_QUERY` set so that a parenthesized name before a clause keyword is
//! never taken for a cast.

use sable_ir::SyntaxKind;
use sable_syntax::SyntaxNode;

use crate::context::ParseContext;
use crate::disambiguate::{self, NullableMode};
use crate::parser::Parser;

use SyntaxKind as K;

impl Parser<'_> {
    /// `from x in e ...`, with the cursor on `from`.
    pub(crate) fn parse_query_expression(&mut self) -> SyntaxNode {
        self.with_context(ParseContext::IN_QUERY, |p| {
            let mut b = p.start();
            b.push(p.parse_from_clause());
            b.push(p.parse_query_body());
            p.finish(b, K::QueryExpression)
        })
    }

    /// `from [T] x in e`
    fn parse_from_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::FromKeyword));
        if !(self.at(K::IdentifierToken) && self.nth(1) == K::InKeyword) {
            let mut lookahead = self.cursor;
            if disambiguate::scan_type(&mut lookahead, NullableMode::Greedy).is_type()
                && lookahead.check(K::IdentifierToken)
            {
                b.push(self.parse_type());
            }
        }
        b.push(self.expect_identifier());
        b.push(self.expect(K::InKeyword));
        b.push(self.parse_expression());
        self.finish(b, K::FromClause)
    }

    fn parse_query_body(&mut self) -> SyntaxNode {
        let mut b = self.start();
        loop {
            let clause = if self.at_contextual(K::FromKeyword) {
                self.parse_from_clause()
            } else if self.at_contextual(K::LetKeyword) {
                self.parse_let_clause()
            } else if self.at_contextual(K::WhereKeyword) {
                self.parse_where_clause()
            } else if self.at_contextual(K::JoinKeyword) {
                self.parse_join_clause()
            } else if self.at_contextual(K::OrderByKeyword) {
                self.parse_order_by_clause()
            } else {
                break;
            };
            b.push(clause);
        }
        if self.at_contextual(K::GroupKeyword) {
            b.push(self.parse_group_clause());
        } else if self.at_contextual(K::SelectKeyword) {
            b.push(self.parse_select_clause());
        } else {
            self.report_expected(K::SelectKeyword);
            let mut select = self.start();
            select.push(self.missing(K::SelectKeyword));
            select.push(self.missing_name());
            b.push(self.finish(select, K::SelectClause));
        }
        if self.at_contextual(K::IntoKeyword) {
            let mut continuation = self.start();
            continuation.push(self.bump_as(K::IntoKeyword));
            continuation.push(self.expect_identifier());
            continuation.push(self.parse_query_body());
            b.push(self.finish(continuation, K::QueryContinuation));
        }
        self.finish(b, K::QueryBody)
    }

    /// `let x = e`
    fn parse_let_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::LetKeyword));
        b.push(self.expect_identifier());
        b.push(self.expect(K::EqualsToken));
        b.push(self.parse_expression());
        self.finish(b, K::LetClause)
    }

    fn parse_where_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::WhereKeyword));
        b.push(self.parse_expression());
        self.finish(b, K::WhereClause)
    }

    /// `join [T] x in e on a equals b [into g]`
    fn parse_join_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::JoinKeyword));
        if !(self.at(K::IdentifierToken) && self.nth(1) == K::InKeyword) {
            b.push(self.parse_type());
        }
        b.push(self.expect_identifier());
        b.push(self.expect(K::InKeyword));
        b.push(self.parse_expression());
        b.push(self.expect_contextual(K::OnKeyword));
        b.push(self.parse_expression());
        b.push(self.expect_contextual(K::EqualsKeyword));
        b.push(self.parse_expression());
        if self.at_contextual(K::IntoKeyword) {
            let mut into = self.start();
            into.push(self.bump_as(K::IntoKeyword));
            into.push(self.expect_identifier());
            b.push(self.finish(into, K::JoinIntoClause));
        }
        self.finish(b, K::JoinClause)
    }

    /// `orderby a, b descending`
    fn parse_order_by_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::OrderByKeyword));
        loop {
            let mut ordering = self.start();
            ordering.push(self.parse_expression());
            let kind = if let Some(keyword) = self.eat_contextual(K::DescendingKeyword) {
                ordering.push(keyword);
                K::DescendingOrdering
            } else {
                ordering.push_opt(self.eat_contextual(K::AscendingKeyword));
                K::AscendingOrdering
            };
            b.push(self.finish(ordering, kind));
            match self.eat(K::CommaToken) {
                Some(comma) => b.push(comma),
                None => break,
            }
        }
        self.finish(b, K::OrderByClause)
    }

    fn parse_select_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::SelectKeyword));
        b.push(self.parse_expression());
        self.finish(b, K::SelectClause)
    }

    /// `group e by k`
    fn parse_group_clause(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump_as(K::GroupKeyword));
        b.push(self.parse_expression());
        b.push(self.expect_contextual(K::ByKeyword));
        b.push(self.parse_expression());
        self.finish(b, K::GroupClause)
    }
}
