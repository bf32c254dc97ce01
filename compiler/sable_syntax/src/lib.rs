//! Lossless syntax tree.
//!
//! Trees are owned and immutable once built. Every character of the source
//! lives in exactly one place: a token's text, or a trivia entry attached
//! before or after a token. Concatenating [`SyntaxNode::full_text`] over a
//! tree therefore reproduces the parsed text byte for byte.
//!
//! Missing tokens (synthesised by error recovery) have empty text, no trivia
//! and the [`TokenFlags::MISSING`] flag; they occupy a real, zero-width
//! position in the tree.

mod dump;
mod node;
mod token;
mod trivia;

pub use node::{Descendants, SyntaxElement, SyntaxNode, Tokens};
pub use token::{Token, TokenFlags};
pub use trivia::{Trivia, TriviaList};
