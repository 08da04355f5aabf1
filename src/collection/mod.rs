//! Generic operations over collections.
//!
//! A *collection* is either an ordered sequence (`[T]`, `Vec<T>`, `[T; N]`,
//! `VecDeque<T>`) or a keyed mapping (`BTreeMap<K, V>`, `HashMap<K, V, S>`).
//! Both shapes implement [`Collection`], so every operation in this module
//! that accepts a collection works on either of them.
//!
//! # Layers
//!
//! - [`each`]: the traversal primitive every other operation is built on
//! - [`index_of`], [`filter`], [`reject`], [`uniq`]: search and filtering
//! - [`map`], [`pluck`], [`reduce`], [`contains`], [`every`], [`some`]: transform and fold
//! - [`shuffle`], [`invoke`], [`sort_by`], [`zip`], [`flatten`],
//!   [`intersection`], [`difference`]: compositions of the layers above
//!
//! # Examples
//!
//! ```rust
//! use combinars::collection::{each, filter, reduce};
//! use std::collections::BTreeMap;
//!
//! let numbers = vec![1, 2, 3, 4];
//! let evens = filter(&numbers, |number| number % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let prices = BTreeMap::from([("apple", 3), ("pear", 5)]);
//! assert_eq!(reduce(&prices, |total, price| total + price, 0), 8);
//!
//! let mut keys = Vec::new();
//! each(&prices, |_, key, _| keys.push(*key));
//! assert_eq!(keys, vec!["apple", "pear"]);
//! ```

mod advanced;
mod fold;
mod nested;
mod search;
mod slicing;
mod truthy;

pub use advanced::{
    Invoke, difference, intersection, invoke, invoke_with, shuffle, shuffle_with, sort_by,
    sort_by_property, zip, zip_pair,
};
pub use fold::{
    contains, every, every_truthy, map, pluck, reduce, reduce_unseeded, some, some_truthy,
};
pub use nested::{Nested, flatten};
pub use search::{filter, index_of, reject, uniq, uniq_by_string};
pub use slicing::{first, first_n, last, last_n};
pub use truthy::Truthy;

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// A finite, fully materialized collection that can be traversed.
///
/// Ordered sequences are keyed by their zero-based position; mappings are
/// keyed by a reference to their own key type.
///
/// # Laws
///
/// - **Exactly once**: `entries` yields every element exactly once.
/// - **Stable order**: sequences are traversed in ascending index order;
///   mappings in their natural enumeration order, which does not change
///   between traversals of the same unmodified instance.
/// - **Consistent size**: `entries().count() == size()`.
pub trait Collection {
    /// The element type.
    type Value;

    /// The key handed to visitors alongside each element.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Returns an iterator over `(key, value)` pairs in traversal order.
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the collection has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Collection for [T] {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Value = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Value = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// Calls `visitor(value, key, collection)` once for every element.
///
/// Sequences pass the zero-based index as the key; mappings pass a
/// reference to the entry's key. The visitor's return value is ignored.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::each;
///
/// let letters = ['a', 'b', 'c'];
/// let mut seen = Vec::new();
/// each(&letters, |letter, index, collection| {
///     assert_eq!(collection.len(), 3);
///     seen.push((index, *letter));
/// });
/// assert_eq!(seen, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut visitor: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    for (key, value) in collection.entries() {
        visitor(value, key, collection);
    }
}
