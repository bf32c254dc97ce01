//! Indented tree dumps for tests and `sablec --dump`.

use std::fmt::Write;

use sable_stack::ensure_sufficient_stack;

use crate::{SyntaxElement, SyntaxNode, Token};

impl SyntaxNode {
    /// Render the tree one element per line, two spaces per level.
    ///
    /// Fixed-text tokens print their kind only; identifiers and literals add
    /// their quoted text; missing tokens print `<missing>`. Trivia is omitted.
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        dump_node(self, 0, &mut out);
        out
    }
}

fn dump_node(node: &SyntaxNode, depth: usize, out: &mut String) {
    indent(depth, out);
    let _ = writeln!(out, "{:?}", node.kind());
    for child in node.children() {
        match child {
            SyntaxElement::Node(child) => {
                ensure_sufficient_stack(|| dump_node(child, depth + 1, out));
            }
            SyntaxElement::Token(token) => dump_token(token, depth + 1, out),
        }
    }
}

fn dump_token(token: &Token, depth: usize, out: &mut String) {
    indent(depth, out);
    // Writing to a String cannot fail.
    let _ = if token.is_missing() {
        writeln!(out, "{:?} <missing>", token.kind)
    } else if token.kind.fixed_text().is_empty() || token.kind.fixed_text() != token.text {
        writeln!(out, "{:?} {:?}", token.kind, token.text)
    } else {
        writeln!(out, "{:?}", token.kind)
    };
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
