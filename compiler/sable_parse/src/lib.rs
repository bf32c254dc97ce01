//! Error-tolerant recursive descent parser for Sable.
//!
//! Produces lossless syntax trees: every byte of the input, trivia and
//! skipped tokens included, is owned by exactly one token of the tree, so
//! `root.full_text()` reproduces the source. Parsing never fails. Missing
//! tokens are synthesised, unusable ones are kept in `SkippedTokens` nodes,
//! and every problem becomes a diagnostic attached to the narrowest node
//! enclosing it.
//!
//! # Layers
//!
//! - `cursor`: position over the lexer's token slice
//! - `disambiguate`: lookahead classifiers for ambiguous prefixes
//! - `snapshot`: checkpoint and rewind for speculative parsing
//! - `builder`: bottom-up node assembly and diagnostic claiming
//! - `recovery`, `progress`: token sets and loop guards for error recovery
//! - `grammar`: the productions
//! - `doc`: the documentation-comment reference grammar

mod builder;
mod context;
mod cursor;
mod disambiguate;
pub mod doc;
mod grammar;
mod parser;
mod progress;
mod recovery;
mod snapshot;
mod tree;

pub use tree::{ParsedNode, SyntaxTree};

use sable_diagnostic::ErrorCode;
use sable_options::ParseOptions;
use sable_syntax::SyntaxNode;

use crate::parser::Parser;
use crate::recovery::TokenSet;

/// Parse a whole compilation unit.
pub fn parse_syntax_tree(text: &str, options: &ParseOptions) -> SyntaxTree {
    let tokens = sable_lexer::lex(text, options);
    let mut parser = Parser::new(&tokens, options);
    let root = parser.parse_compilation_unit();
    debug_assert_eq!(
        root.full_span().len() as usize,
        text.len(),
        "compilation unit must cover the whole text"
    );
    tracing::debug!(
        tokens = tokens.len(),
        diagnostics = root.all_diagnostics().len(),
        "parsed compilation unit"
    );
    SyntaxTree::new(root, options.clone(), text)
}

/// Parse one expression starting at byte `offset` of `text`.
///
/// With `consume_full_text`, tokens after the expression are kept as
/// skipped tokens and the node's full text is `text[offset..]`.
pub fn parse_expression(
    text: &str,
    offset: usize,
    options: &ParseOptions,
    consume_full_text: bool,
) -> ParsedNode {
    parse_fragment(text, offset, options, consume_full_text, |p| {
        p.parse_expression()
    })
}

/// Parse one statement starting at byte `offset` of `text`.
pub fn parse_statement(
    text: &str,
    offset: usize,
    options: &ParseOptions,
    consume_full_text: bool,
) -> ParsedNode {
    parse_fragment(text, offset, options, consume_full_text, |p| {
        p.parse_statement()
    })
}

/// Parse one member or type declaration starting at byte `offset` of `text`.
pub fn parse_member_declaration(
    text: &str,
    offset: usize,
    options: &ParseOptions,
    consume_full_text: bool,
) -> ParsedNode {
    parse_fragment(
        text,
        offset,
        options,
        consume_full_text,
        |p| p.parse_member_declaration(),
    )
}

/// Parse one type starting at byte `offset` of `text`.
pub fn parse_type_name(
    text: &str,
    offset: usize,
    options: &ParseOptions,
    consume_full_text: bool,
) -> ParsedNode {
    parse_fragment(text, offset, options, consume_full_text, |p| p.parse_type())
}

fn parse_fragment(
    text: &str,
    offset: usize,
    options: &ParseOptions,
    consume_full_text: bool,
    production: impl FnOnce(&mut Parser<'_>) -> SyntaxNode,
) -> ParsedNode {
    let tokens = sable_lexer::lex_from(text, offset, options);
    let mut parser = Parser::new(&tokens, options);
    let mut node = production(&mut parser);
    if consume_full_text {
        node = consume_rest(&mut parser, node);
    }
    let rest = parser.diagnostics.take_all();
    ParsedNode::new(node.with_diagnostics(rest))
}

/// Attach everything after `node` to it: leftover tokens as skipped tokens,
/// then the trivia before end of file.
fn consume_rest(parser: &mut Parser<'_>, node: SyntaxNode) -> SyntaxNode {
    let node = match parser.skip_until(TokenSet::new(), ErrorCode::CS1073) {
        Some(skipped) => node.with_appended_child(skipped),
        None => node,
    };
    let eof = parser.current();
    node.with_trailing_trivia(eof.leading.iter().cloned())
}

#[cfg(test)]
mod tests;
