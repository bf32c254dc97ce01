//! Syntax nodes.
//!
//! Trees can be as deep as the source is nested, so walks here use explicit
//! stacks, and the structural impls (`Clone`, `Drop`, equality) run under
//! the stack guard.

use std::fmt;
use std::hash::{Hash, Hasher};

use sable_diagnostic::Diagnostic;
use sable_ir::{Span, SyntaxKind};
use sable_stack::ensure_sufficient_stack;

use crate::{Token, Trivia};

/// A child of a node: another node or a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(Token),
}

impl SyntaxElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Node(node) => node.kind,
            SyntaxElement::Token(token) => token.kind,
        }
    }

    pub fn full_start(&self) -> u32 {
        match self {
            SyntaxElement::Node(node) => node.full_start,
            SyntaxElement::Token(token) => token.full_start,
        }
    }

    pub fn full_width(&self) -> u32 {
        match self {
            SyntaxElement::Node(node) => node.full_width,
            SyntaxElement::Token(token) => token.full_width(),
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        }
    }

    fn as_node_mut(&mut self) -> Option<&mut SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    fn as_token_mut(&mut self) -> Option<&mut Token> {
        match self {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        }
    }

    pub fn write_full_text(&self, out: &mut String) {
        match self {
            SyntaxElement::Node(node) => node.write_full_text(out),
            SyntaxElement::Token(token) => token.write_full_text(out),
        }
    }

    /// Zero width and made only of missing tokens?
    pub fn is_missing(&self) -> bool {
        match self {
            SyntaxElement::Node(node) => node.is_missing(),
            SyntaxElement::Token(token) => token.is_missing(),
        }
    }
}

impl From<SyntaxNode> for SyntaxElement {
    fn from(node: SyntaxNode) -> Self {
        SyntaxElement::Node(node)
    }
}

impl From<Token> for SyntaxElement {
    fn from(token: Token) -> Self {
        SyntaxElement::Token(token)
    }
}

/// An interior tree node. Owns its children; no parent links.
pub struct SyntaxNode {
    kind: SyntaxKind,
    children: Vec<SyntaxElement>,
    diagnostics: Vec<Diagnostic>,
    full_start: u32,
    full_width: u32,
}

impl SyntaxNode {
    /// Build a node from finished children. `position` is used only when
    /// `children` is empty.
    pub fn new(kind: SyntaxKind, children: Vec<SyntaxElement>, position: u32) -> Self {
        debug_assert!(kind.is_node(), "{kind:?} is not a node kind");
        let full_start = children.first().map_or(position, SyntaxElement::full_start);
        let full_width = children.iter().map(SyntaxElement::full_width).sum();
        debug_assert!(
            children
                .windows(2)
                .all(|w| w[0].full_start() + w[0].full_width() == w[1].full_start()),
            "children of {kind:?} are not contiguous"
        );
        SyntaxNode {
            kind,
            children,
            diagnostics: Vec::new(),
            full_start,
            full_width,
        }
    }

    /// Attach diagnostics claimed during construction.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics.extend(diagnostics);
        self
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn children(&self) -> &[SyntaxElement] {
        &self.children
    }

    /// Consume the node, yielding its children.
    pub fn into_children(mut self) -> Vec<SyntaxElement> {
        std::mem::take(&mut self.children)
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter_map(SyntaxElement::as_node)
    }

    pub fn child_tokens(&self) -> impl Iterator<Item = &Token> {
        self.children.iter().filter_map(SyntaxElement::as_token)
    }

    /// First direct child node of `kind`.
    pub fn child_node(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.child_nodes().find(|n| n.kind == kind)
    }

    /// First direct child token of `kind`.
    pub fn child_token(&self, kind: SyntaxKind) -> Option<&Token> {
        self.child_tokens().find(|t| t.kind == kind)
    }

    /// Diagnostics attached directly to this node.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn full_start(&self) -> u32 {
        self.full_start
    }

    pub fn full_width(&self) -> u32 {
        self.full_width
    }

    pub fn full_span(&self) -> Span {
        Span::at(self.full_start, self.full_width)
    }

    /// Span without the first token's leading and last token's trailing trivia.
    pub fn span(&self) -> Span {
        let start = self
            .first_token()
            .map_or(self.full_start, |t| t.span().start);
        let end = self.last_token().map_or(start, |t| t.span().end);
        Span::new(start, end.max(start))
    }

    pub fn full_text(&self) -> String {
        let mut out = String::with_capacity(self.full_width as usize);
        self.write_full_text(&mut out);
        out
    }

    pub fn write_full_text(&self, out: &mut String) {
        for token in self.tokens() {
            token.write_full_text(out);
        }
    }

    /// Is every token under this node missing?
    pub fn is_missing(&self) -> bool {
        self.full_width == 0 && self.tokens().all(Token::is_missing)
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            stack: vec![self.children.iter()],
        }
    }

    /// This node and every descendant node, pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn first_token(&self) -> Option<&Token> {
        self.tokens().next()
    }

    pub fn last_token(&self) -> Option<&Token> {
        let mut stack = vec![self.children.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next_back() {
                Some(SyntaxElement::Token(token)) => return Some(token),
                Some(SyntaxElement::Node(node)) => stack.push(node.children.iter()),
                None => {
                    stack.pop();
                }
            }
        }
        None
    }

    /// Every diagnostic in the subtree: lexical ones first, in source
    /// order, then those attached to nodes, pre-order.
    ///
    /// A token is always scanned before the parser reports anything at its
    /// position, so a stable sort by start keeps discovery order.
    pub fn all_diagnostics(&self) -> Vec<Diagnostic> {
        let mut out: Vec<Diagnostic> = self
            .tokens()
            .flat_map(|token| token.diagnostics.iter().cloned())
            .collect();
        out.extend(
            self.descendants()
                .flat_map(|node| node.diagnostics.iter().cloned()),
        );
        out
    }

    pub fn contains_diagnostics(&self) -> bool {
        self.descendants().any(|node| !node.diagnostics.is_empty())
            || self.tokens().any(|token| !token.diagnostics.is_empty())
    }

    /// The node with `trivia` appended after the last token's trailing
    /// trivia. Only the right spine is touched.
    #[must_use]
    pub fn with_trailing_trivia(mut self, trivia: impl IntoIterator<Item = Trivia>) -> SyntaxNode {
        let extra: Vec<Trivia> = trivia.into_iter().collect();
        let added: u32 = extra.iter().map(Trivia::width).sum();
        if added > 0 {
            self.append_trailing(extra, added);
        }
        self
    }

    fn append_trailing(&mut self, extra: Vec<Trivia>, added: u32) -> Option<()> {
        let path = self.last_token_path()?;
        let (&last, spine) = path.split_last()?;
        let mut node = self;
        for &index in spine {
            node.full_width += added;
            node = node.children.get_mut(index)?.as_node_mut()?;
        }
        node.full_width += added;
        node.children
            .get_mut(last)?
            .as_token_mut()?
            .trailing
            .extend(extra);
        Some(())
    }

    /// Child indices leading from this node down to its last token.
    fn last_token_path(&self) -> Option<Vec<usize>> {
        let mut stack: Vec<(&SyntaxNode, usize)> = vec![(self, self.children.len())];
        loop {
            let top = stack.last_mut()?;
            if top.1 == 0 {
                stack.pop();
                continue;
            }
            top.1 -= 1;
            let (node, index) = *top;
            match &node.children[index] {
                SyntaxElement::Token(_) => return Some(stack.iter().map(|&(_, i)| i).collect()),
                SyntaxElement::Node(child) => stack.push((child, child.children.len())),
            }
        }
    }

    /// The node with one more child at the end.
    #[must_use]
    pub fn with_appended_child(mut self, child: impl Into<SyntaxElement>) -> SyntaxNode {
        let mut children = std::mem::take(&mut self.children);
        children.push(child.into());
        let diagnostics = std::mem::take(&mut self.diagnostics);
        SyntaxNode::new(self.kind, children, self.full_start).with_diagnostics(diagnostics)
    }
}

impl Clone for SyntaxNode {
    fn clone(&self) -> Self {
        SyntaxNode {
            kind: self.kind,
            children: ensure_sufficient_stack(|| self.children.clone()),
            diagnostics: self.diagnostics.clone(),
            full_start: self.full_start,
            full_width: self.full_width,
        }
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let children = std::mem::take(&mut self.children);
        ensure_sufficient_stack(move || drop(children));
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.full_start == other.full_start
            && self.full_width == other.full_width
            && self.diagnostics == other.diagnostics
            && ensure_sufficient_stack(|| self.children == other.children)
    }
}

impl Eq for SyntaxNode {}

impl Hash for SyntaxNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.full_start.hash(state);
        self.full_width.hash(state);
        self.diagnostics.hash(state);
        ensure_sufficient_stack(|| self.children.hash(state));
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("SyntaxNode")
                .field("kind", &self.kind)
                .field("children", &self.children)
                .field("diagnostics", &self.diagnostics)
                .field("full_start", &self.full_start)
                .field("full_width", &self.full_width)
                .finish()
        })
    }
}

/// Pre-order iterator over a subtree's tokens.
pub struct Tokens<'a> {
    stack: Vec<std::slice::Iter<'a, SyntaxElement>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<&'a Token> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(SyntaxElement::Token(token)) => return Some(token),
                Some(SyntaxElement::Node(node)) => self.stack.push(node.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Pre-order iterator over a subtree's nodes.
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<&'a SyntaxNode> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().collect::<Vec<_>>().into_iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests;
