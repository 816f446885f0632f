//! Result type for "always succeeds" model calls.

/// A value produced by a generative call, tagged with where it came from.
///
/// The persona, café and video clients never fail; when the model call does,
/// they substitute a safe default. `Generated` keeps that distinction visible
/// to callers and tests without changing the happy-path behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated<T> {
    /// Produced from a successful model response
    Fresh(T),
    /// Substituted default after a failure
    Fallback(T),
}

impl<T> Generated<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Generated::Fallback(_))
    }

    /// Borrow the value regardless of origin
    pub fn value(&self) -> &T {
        match self {
            Generated::Fresh(v) | Generated::Fallback(v) => v,
        }
    }

    /// Discard the origin and return the value
    pub fn into_inner(self) -> T {
        match self {
            Generated::Fresh(v) | Generated::Fallback(v) => v,
        }
    }
}
