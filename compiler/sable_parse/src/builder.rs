//! Bottom-up node assembly.
//!
//! A production calls [`Parser::start`], pushes finished children in source
//! order and hands the builder back to [`Parser::finish`]. Finishing claims
//! every diagnostic reported since the start whose span lies inside the new
//! node, so diagnostics settle on the narrowest enclosing node.

use sable_diagnostic::BagMark;
use sable_ir::SyntaxKind;
use sable_syntax::{SyntaxElement, SyntaxNode};

use crate::parser::Parser;

/// Children collected for a node under construction.
#[must_use = "a started node must be finished"]
pub(crate) struct NodeBuilder {
    mark: BagMark,
    /// Position used when the node ends up with no children.
    position: u32,
    children: Vec<SyntaxElement>,
}

impl NodeBuilder {
    pub(crate) fn push(&mut self, child: impl Into<SyntaxElement>) {
        self.children.push(child.into());
    }

    pub(crate) fn push_opt<T: Into<SyntaxElement>>(&mut self, child: Option<T>) {
        if let Some(child) = child {
            self.push(child);
        }
    }

    pub(crate) fn extend<T: Into<SyntaxElement>>(&mut self, children: impl IntoIterator<Item = T>) {
        self.children.extend(children.into_iter().map(Into::into));
    }
}

impl Parser<'_> {
    /// Begin a node at the current token.
    pub(crate) fn start(&self) -> NodeBuilder {
        NodeBuilder {
            mark: self.diagnostics.mark(),
            position: self.current_full_start(),
            children: Vec::new(),
        }
    }

    /// Begin a node whose first child was already built, as in left-recursive
    /// forms like `a.b` or `a + b`. The node claims diagnostics reported while
    /// `first` was parsed only if they were not claimed by `first` itself.
    pub(crate) fn start_with(&self, first: impl Into<SyntaxElement>) -> NodeBuilder {
        let first = first.into();
        NodeBuilder {
            mark: self.diagnostics.mark(),
            position: first.full_start(),
            children: vec![first],
        }
    }

    /// Complete a node and attach the diagnostics it encloses.
    pub(crate) fn finish(&mut self, builder: NodeBuilder, kind: SyntaxKind) -> SyntaxNode {
        let node = SyntaxNode::new(kind, builder.children, builder.position);
        let claimed = self.diagnostics.take_within(builder.mark, node.full_span());
        node.with_diagnostics(claimed)
    }

    /// A node holding exactly one child.
    pub(crate) fn wrap(&mut self, child: impl Into<SyntaxElement>, kind: SyntaxKind) -> SyntaxNode {
        let builder = self.start_with(child);
        self.finish(builder, kind)
    }
}
