//! Grammar productions.
//!
//! Every production is a method on [`Parser`], split by syntactic category:
//!
//! - `ty`: names and types
//! - `expr`: expressions, by precedence climbing
//! - `pattern`: patterns after `is`, `case` and in switch arms
//! - `query`: query expressions
//! - `stmt`: statements and local declarations
//! - `decl`: compilation units, namespaces, types and members
//!
//! Productions never fail. A missing piece becomes a missing token or an
//! empty node, and unusable tokens end up in `SkippedTokens`.

mod decl;
mod expr;
mod pattern;
mod query;
mod stmt;
mod ty;

pub(crate) use expr::Precedence;

use sable_diagnostic::ErrorCode;
use sable_ir::SyntaxKind;
use sable_syntax::{SyntaxElement, SyntaxNode};

use crate::builder::NodeBuilder;
use crate::parser::Parser;
use crate::progress::Progress;
use crate::recovery::{recovery_action, RecoveryAction, TokenSet, LIST_FOLLOW};

use SyntaxKind as K;

impl Parser<'_> {
    /// Parse `element { "," element }` into `b`, stopping before `close`.
    ///
    /// `starts` holds tokens that begin an element; a missing comma before
    /// one of them is synthesised. `stop` adds tokens that belong to an
    /// enclosing production besides `close` and the usual closers. Other
    /// tokens are skipped.
    pub(crate) fn parse_separated(
        &mut self,
        b: &mut NodeBuilder,
        close: SyntaxKind,
        starts: TokenSet,
        stop: TokenSet,
        trailing_comma: bool,
        mut element: impl FnMut(&mut Self) -> SyntaxNode,
    ) {
        let terminators = LIST_FOLLOW.union(stop).with(close);
        if self.at(close) || (self.at_set(terminators) && !self.at_set(starts)) {
            return;
        }
        loop {
            let start = self.position();
            b.push(element(self));
            let mut progress = Progress::since(start, self.position());
            // Separator: comma, close, or recovery.
            loop {
                if self.at(close) {
                    return;
                }
                if let Some(comma) = self.eat(K::CommaToken) {
                    b.push(comma);
                    if trailing_comma && self.at(close) {
                        return;
                    }
                    break;
                }
                match recovery_action(self.kind(), starts, terminators) {
                    RecoveryAction::Synthesize if progress.made() => {
                        b.push(self.expect(K::CommaToken));
                        break;
                    }
                    RecoveryAction::Synthesize => {
                        b.push_opt(self.skip_token(ErrorCode::CS1073));
                        progress = Progress::Made;
                    }
                    RecoveryAction::Skip => {
                        let resync = starts.union(terminators).with(K::CommaToken);
                        b.push_opt(self.skip_until(resync, ErrorCode::CS1073));
                        progress = Progress::Made;
                    }
                    RecoveryAction::Bail => return,
                }
            }
        }
    }

    /// Dissolve a wrapper node into its children, keeping its diagnostics.
    pub(crate) fn dissolve(&mut self, node: SyntaxNode) -> Vec<SyntaxElement> {
        for diagnostic in node.diagnostics() {
            self.report(diagnostic.clone());
        }
        node.into_children()
    }

    /// Dissolve a single-child wrapper node.
    pub(crate) fn unwrap_single(&mut self, node: SyntaxNode) -> SyntaxElement {
        let mut children = self.dissolve(node);
        debug_assert_eq!(children.len(), 1, "only single-child nodes dissolve");
        children.swap_remove(0)
    }
}
