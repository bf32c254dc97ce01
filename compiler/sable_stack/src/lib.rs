//! Stack growth for deeply nested source.
//!
//! The parser recurses once per nesting level of expressions, statements,
//! patterns and types. Pathological input such as ten thousand opening
//! parentheses must still produce a tree, so every recursive production
//! entry goes through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate switches to a freshly allocated
//! segment when the remaining stack drops below [`RED_ZONE`]. On wasm32 the
//! closure is called directly.

/// Grow when less than this much stack remains.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining stack in bytes, when the platform can tell.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
