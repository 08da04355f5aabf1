//! Search and filtering built on [`each`](super::each).

use std::fmt::Display;
use std::hash::Hash;

use super::{Collection, each};
use crate::hashing::HashSet;

/// Returns the position of the first element equal to `target`.
///
/// Equality is `PartialEq`, the same notion used by
/// [`contains`](super::contains), [`intersection`](super::intersection) and
/// [`difference`](super::difference).
///
/// # Examples
///
/// ```rust
/// use combinars::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20, 30], &40), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|element| element == target)
}

/// Returns the elements for which `predicate` holds, in traversal order.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::filter;
///
/// let odds = filter(&[1, 2, 3, 4, 5], |number| number % 2 == 1);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    let mut results = Vec::new();
    each(collection, |element, _, _| {
        if predicate(element) {
            results.push(element.clone());
        }
    });
    results
}

/// Returns the elements for which `predicate` does not hold.
///
/// `reject` is the complement of [`filter`]: together they partition the
/// traversal, each half keeping its relative order.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::reject;
///
/// let evens = reject(&[1, 2, 3, 4, 5], |number| number % 2 == 1);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    filter(collection, |element| !predicate(element))
}

/// Returns a duplicate-free copy of `sequence`.
///
/// Values are compared by `Eq`/`Hash`; the first occurrence of each value
/// is kept and the survivors stay in input order.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::default();
    let mut results = Vec::new();
    each(sequence, |element, _, _| {
        if seen.insert(element) {
            results.push(element.clone());
        }
    });
    results
}

/// Returns a copy of `sequence` with duplicates removed by printed form.
///
/// Two values are duplicates when their `Display` output is identical, even
/// if the values themselves differ: a token type that prints both the number
/// `1` and the text `"1"` as `1` keeps only the first of them. The first
/// representative of each printed form survives, in input order.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::uniq_by_string;
///
/// assert_eq!(uniq_by_string(&[0.5, 1.0, 0.5]), vec![0.5, 1.0]);
/// ```
pub fn uniq_by_string<T>(sequence: &[T]) -> Vec<T>
where
    T: Display + Clone,
{
    let mut seen: HashSet<String> = HashSet::default();
    filter(sequence, |element| seen.insert(element.to_string()))
}
