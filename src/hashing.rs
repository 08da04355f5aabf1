//! Hash map and set aliases used by the memoize cache and `uniq`.
//!
//! With the `fxhash` feature the faster, non-DoS-resistant `FxHash` is used;
//! otherwise the standard library's `SipHash` default.

#[cfg(feature = "fxhash")]
pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(feature = "fxhash")]
pub(crate) type HashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(not(feature = "fxhash"))]
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(not(feature = "fxhash"))]
pub(crate) type HashSet<T> = std::collections::HashSet<T>;
