//! Sable IR - shared vocabulary types for the Sable front-end.
//!
//! This crate contains the small, dependency-free pieces every other phase
//! agrees on:
//! - [`Span`] for absolute byte ranges in a source text
//! - [`LineIndex`] for mapping offsets to 1-based line/column pairs
//! - [`SyntaxKind`], the closed enumeration of every token, trivia and node
//!   kind the parser can produce, plus the lexical facts attached to it

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod kind;
mod line_index;
mod span;

pub use kind::SyntaxKind;
pub use line_index::{LineCol, LineIndex};
pub use span::{Span, SpanError};
