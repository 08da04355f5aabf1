//! Transform and fold operations.
//!
//! [`reduce`] is the pivotal operation here: [`contains`], [`every`] and
//! [`some`] are all folds over a boolean accumulator.
//!
//! # Laws
//!
//! ```text
//! map(s, identity) == s
//! reduce(s, f, init) == s.iter().fold(init, f)
//! reduce_unseeded([x], f) == Some(x)            // f is never called
//! every([], p) == true
//! some([], p) == false
//! ```

use super::{Collection, Truthy, each};
use crate::object::Mapping;

/// Returns `iterator(element)` for every element, in traversal order.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |number| number * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, R, F>(collection: &C, mut iterator: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> R,
{
    let mut results = Vec::with_capacity(collection.size());
    each(collection, |element, _, _| results.push(iterator(element)));
    results
}

/// Extracts the value stored under `key` from every element.
///
/// Elements lacking `key` yield `None`.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "30")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, &"age"), vec![Some("30"), None]);
/// ```
pub fn pluck<C, K, V>(collection: &C, key: &K) -> Vec<Option<V>>
where
    C: Collection + ?Sized,
    C::Value: Mapping<K, V>,
    V: Clone,
{
    map(collection, |element| element.lookup(key).cloned())
}

/// Folds the collection from left to right, starting from `accumulator`.
///
/// Every element participates as `iterator(accumulator, element)`. The
/// collection is only borrowed and is never modified.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::reduce;
///
/// let sum = reduce(&[1, 2, 3], |total, number| total + number, 0);
/// assert_eq!(sum, 6);
/// ```
pub fn reduce<C, B, F>(collection: &C, mut iterator: F, accumulator: B) -> B
where
    C: Collection + ?Sized,
    F: FnMut(B, &C::Value) -> B,
{
    collection
        .entries()
        .fold(accumulator, |accumulator, (_, element)| {
            iterator(accumulator, element)
        })
}

/// Folds the collection using its first element as the accumulator.
///
/// The first element is never passed to `iterator`; folding starts from the
/// second element. A single-element collection returns that element without
/// calling `iterator` at all. Returns `None` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::reduce_unseeded;
///
/// let result = reduce_unseeded(&[5], |total, number| total + number * number);
/// assert_eq!(result, Some(5));
///
/// let product = reduce_unseeded(&[2, 3, 4], |total, number| total * number);
/// assert_eq!(product, Some(24));
/// ```
pub fn reduce_unseeded<C, F>(collection: &C, mut iterator: F) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &C::Value) -> C::Value,
{
    let mut elements = collection.entries().map(|(_, element)| element);
    let seed = elements.next()?.clone();
    Some(elements.fold(seed, |accumulator, element| {
        iterator(accumulator, element)
    }))
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    reduce(
        collection,
        |was_found, element| was_found || element == target,
        false,
    )
}

/// Returns `true` if `predicate` holds for every element.
///
/// Vacuously `true` for an empty collection. Once an element fails, the
/// predicate is not consulted for the remaining ones.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::every;
///
/// assert!(every(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    reduce(
        collection,
        |all_passed, element| all_passed && predicate(element),
        true,
    )
}

/// Returns `true` if every element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[1, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Vacuously `false` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::some;
///
/// assert!(some(&[1, 3, 4], |number| number % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    reduce(
        collection,
        |any_passed, element| any_passed || predicate(element),
        false,
    )
}

/// Returns `true` if at least one element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::some_truthy;
///
/// assert!(some_truthy(&["", "x"]));
/// assert!(!some_truthy(&[false, false]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    some(collection, Truthy::is_truthy)
}
