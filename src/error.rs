//! Error types shared across the crate.
//!
//! Operations that cannot fail by construction return plain values (or
//! `Option` when the input may be empty). The errors here cover the few
//! contract violations the type system cannot rule out.

use thiserror::Error;

/// Error returned by [`invoke`](crate::collection::invoke) when an element
/// does not provide the requested method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// The element at `index` has no method called `method`.
    #[error("element at index {index} has no method named `{method}`")]
    UnknownMethod {
        /// Name of the method that was requested.
        method: String,
        /// Traversal position of the offending element.
        index: usize,
    },
}

/// Error returned by [`MemoizeSerialized`](crate::function::MemoizeSerialized)
/// when the argument list cannot be turned into a cache key.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum MemoizeError {
    /// The arguments could not be encoded as canonical JSON.
    #[error("failed to serialize memoize arguments: {0}")]
    Serialization(#[from] serde_json::Error),
}
