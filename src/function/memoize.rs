//! Caching of function results per distinct argument list.
//!
//! [`Memoize`] does for every distinct argument what [`Once`](super::Once)
//! does for the first call: the function runs once per argument value and
//! the result is replayed afterwards. The function is assumed to be
//! referentially transparent; the cache is never invalidated and grows for
//! the lifetime of the wrapper.
//!
//! Two keying schemes are available:
//!
//! - [`Memoize`] keys the cache by the argument value itself, so arguments
//!   must be `Hash + Eq`. Equal arguments always hit the same entry.
//! - [`MemoizeSerialized`] (feature `serde`) keys the cache by the canonical
//!   JSON encoding of the arguments, which also covers arguments that are
//!   not `Hash`, such as floats or plain nested structures.
//!
//! # Examples
//!
//! ```rust
//! use combinars::function::memoize;
//! use std::cell::Cell;
//!
//! let evaluations = Cell::new(0);
//! let square = memoize(|value: &u64| {
//!     evaluations.set(evaluations.get() + 1);
//!     value * value
//! });
//!
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(evaluations.get(), 1);
//!
//! assert_eq!(square.call(3), 9);
//! assert_eq!(evaluations.get(), 2);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

use crate::hashing::HashMap;

/// A function wrapper that caches one result per distinct argument value.
///
/// Arguments are passed as a single value `A`; use a tuple for several.
/// The function receives a reference to the arguments, which are then moved
/// into the cache as the key.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; its cache lives in a `RefCell`.
pub struct Memoize<A, R, F> {
    function: F,
    cache: RefCell<HashMap<A, R>>,
}

/// Wraps `function` in a cache keyed by its arguments.
///
/// Equivalent to [`Memoize::new`].
#[inline]
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    A: Hash + Eq,
    R: Clone,
    F: Fn(&A) -> R,
{
    Memoize::new(function)
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Hash + Eq,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Creates a wrapper with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::default()),
        }
    }

    /// Returns the cached result for `arguments`, computing it on a miss.
    ///
    /// An entry, once written, is never replaced.
    pub fn call(&self, arguments: A) -> R {
        if let Some(result) = self.cache.borrow().get(&arguments) {
            tracing::trace!("memoize cache hit");
            return result.clone();
        }

        tracing::trace!("memoize cache miss");
        let result = (self.function)(&arguments);
        self.cache
            .borrow_mut()
            .entry(arguments)
            .or_insert(result)
            .clone()
    }

    /// Returns `true` if a result for `arguments` is cached.
    pub fn is_cached(&self, arguments: &A) -> bool {
        self.cache.borrow().contains_key(arguments)
    }
}

impl<A, R, F> Memoize<A, R, F> {
    /// Returns the number of cached entries.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
pub use serialized::{MemoizeSerialized, memoize_serialized};

#[cfg(feature = "serde")]
mod serialized {
    use std::cell::RefCell;
    use std::fmt;
    use std::marker::PhantomData;

    use serde::Serialize;

    use crate::error::MemoizeError;
    use crate::hashing::HashMap;

    /// A memoizing wrapper keyed by the JSON encoding of its arguments.
    ///
    /// Arguments that encode to the same JSON text share a cache entry.
    /// Struct fields and sequences encode in declaration order, so equal
    /// values always produce equal keys; `HashMap` arguments do not have a
    /// stable order and should be passed as `BTreeMap` instead.
    pub struct MemoizeSerialized<A, R, F> {
        function: F,
        cache: RefCell<HashMap<String, R>>,
        _arguments: PhantomData<fn(&A)>,
    }

    /// Wraps `function` in a cache keyed by the JSON encoding of its arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::function::memoize_serialized;
    ///
    /// let scale = memoize_serialized(|(value, factor): &(f64, f64)| value * factor);
    /// assert_eq!(scale.try_call((1.5, 2.0)).unwrap(), 3.0);
    /// assert_eq!(scale.cache_len(), 1);
    /// ```
    #[inline]
    pub fn memoize_serialized<A, R, F>(function: F) -> MemoizeSerialized<A, R, F>
    where
        A: Serialize,
        R: Clone,
        F: Fn(&A) -> R,
    {
        MemoizeSerialized {
            function,
            cache: RefCell::new(HashMap::default()),
            _arguments: PhantomData,
        }
    }

    impl<A, R, F> MemoizeSerialized<A, R, F>
    where
        A: Serialize,
        R: Clone,
        F: Fn(&A) -> R,
    {
        /// Returns the cached result for `arguments`, computing it on a miss.
        ///
        /// # Errors
        ///
        /// Returns [`MemoizeError::Serialization`] if `arguments` cannot be
        /// encoded, for example a map with non-string keys.
        pub fn try_call(&self, arguments: A) -> Result<R, MemoizeError> {
            let key = serde_json::to_string(&arguments)?;
            if let Some(result) = self.cache.borrow().get(&key) {
                tracing::trace!(%key, "memoize cache hit");
                return Ok(result.clone());
            }

            tracing::trace!(%key, "memoize cache miss");
            let result = (self.function)(&arguments);
            Ok(self
                .cache
                .borrow_mut()
                .entry(key)
                .or_insert(result)
                .clone())
        }

        /// Returns the number of cached entries.
        pub fn cache_len(&self) -> usize {
            self.cache.borrow().len()
        }
    }

    impl<A, R, F> fmt::Debug for MemoizeSerialized<A, R, F> {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter
                .debug_struct("MemoizeSerialized")
                .field("cached", &self.cache.borrow().len())
                .finish_non_exhaustive()
        }
    }

}
