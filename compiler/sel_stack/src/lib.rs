//! Stack headroom for deep recursion.
//!
//! The parser and the evaluator recurse as deep as the input nests. Instead
//! of imposing a depth limit, recursive call sites run under
//! [`with_headroom`], which grows the stack on demand so deeply nested input
//! evaluates rather than overflowing.
//!
//! On wasm32 this is a passthrough; WASM manages its own stack.

/// Remaining stack below which we grow (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space added per growth (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM version - call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
