//! Lexer for the Sable parser.
//!
//! Turns source text into a vector of [`Token`]s, each carrying its leading
//! and trailing trivia. The token stream always ends with exactly one
//! `EndOfFileToken` whose leading trivia holds whatever follows the last
//! real token. Concatenating every token's full text reproduces the input.
//!
//! Lexical problems never stop lexing: they are attached to the token they
//! concern as [`sable_diagnostic::Diagnostic`]s.
//!
//! # Layers
//!
//! - `cursor`: byte/char cursor with absolute offsets
//! - `scanner`: token assembly, identifiers, numbers, punctuation
//! - `trivia`: whitespace, comments, disabled text
//! - `directive`: `#if` evaluation and the other directives
//! - `literal`, `raw_string`: quoted literals

mod cursor;
mod directive;
mod literal;
mod raw_string;
mod scanner;
mod trivia;

use sable_options::ParseOptions;
use sable_syntax::Token;

use crate::scanner::Lexer;

/// Lex all of `text`.
pub fn lex(text: &str, options: &ParseOptions) -> Vec<Token> {
    lex_from(text, 0, options)
}

/// Lex `text` starting at byte `offset`. Token positions stay absolute.
///
/// An offset past the end, or inside a multi-byte character, is moved back
/// to the nearest character boundary.
pub fn lex_from(text: &str, offset: usize, options: &ParseOptions) -> Vec<Token> {
    let mut start = offset.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut lexer = Lexer::new(text, start, options);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tracing::debug!(count = tokens.len(), offset = start, "lexed text");
    tokens
}

#[cfg(test)]
mod tests;
