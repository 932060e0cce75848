//! Stack growth for deeply nested pattern recursion.
//!
//! Concatenation patterns may nest other concatenations to any depth, and
//! both evaluation and matching walk that nesting recursively. Wrapping each
//! recursive step in [`ensure_sufficient_stack`] keeps a pathological tree
//! from overflowing the native stack.
//!
//! - **Native targets**: grows the stack on demand through `stacker`.
//! - **WASM targets**: calls straight through.
//!
//! ```text
//! fn walk(&self, env: &B) -> PatternResult<String> {
//!     ensure_sufficient_stack(|| match self {
//!         // ... recursive cases ...
//!     })
//! }
//! ```

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
