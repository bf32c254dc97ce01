//! Parse results.

use std::sync::Arc;

use sable_diagnostic::{sort_diagnostics, Diagnostic};
use sable_ir::LineIndex;
use sable_options::ParseOptions;
use sable_syntax::SyntaxNode;

/// A parsed compilation unit together with the text and options it came
/// from.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    root: SyntaxNode,
    options: ParseOptions,
    text: Arc<str>,
    line_index: Arc<LineIndex>,
}

impl SyntaxTree {
    pub(crate) fn new(root: SyntaxNode, options: ParseOptions, text: &str) -> Self {
        SyntaxTree {
            root,
            options,
            line_index: Arc::new(LineIndex::new(text)),
            text: Arc::from(text),
        }
    }

    /// The `CompilationUnit` node.
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Lexical and syntax diagnostics of the whole tree, ordered by
    /// position; ties keep discovery order. Problems with the options
    /// themselves are reported by [`ParseOptions::errors`] instead.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.root.all_diagnostics();
        sort_diagnostics(&mut diagnostics);
        diagnostics
    }

    /// Does the tree carry any error-severity diagnostic?
    pub fn has_errors(&self) -> bool {
        self.root.all_diagnostics().iter().any(Diagnostic::is_error)
    }
}

/// A node parsed by one of the fragment entry points.
#[derive(Clone, Debug)]
pub struct ParsedNode {
    node: SyntaxNode,
    end: u32,
}

impl ParsedNode {
    pub(crate) fn new(node: SyntaxNode) -> Self {
        let end = node.full_span().end;
        ParsedNode { node, end }
    }

    pub fn node(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn into_node(self) -> SyntaxNode {
        self.node
    }

    /// Offset just past the last byte the node covers.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Diagnostics of the node, ordered by position.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.node.all_diagnostics();
        sort_diagnostics(&mut diagnostics);
        diagnostics
    }
}
