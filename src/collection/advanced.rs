//! Collection operations composed from the search and fold layers.

use std::cmp::Ordering;

use rand::Rng;

use super::{Collection, every, filter, index_of, map};
use crate::error::InvokeError;
use crate::object::Mapping;

/// Returns a uniformly shuffled copy of `sequence`.
///
/// Uses the thread-local random number generator. The input is left
/// untouched; see [`shuffle_with`] for reproducible shuffles.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::shuffle;
///
/// let deck = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&deck);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, deck);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Returns a shuffled copy of `sequence` drawing randomness from `rng`.
///
/// Fisher–Yates: walking down from the end, each position is swapped with a
/// uniformly chosen position at or before it, so every permutation is
/// equally likely.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let deck = ['a', 'b', 'c', 'd'];
/// let once = shuffle_with(&deck, &mut StdRng::seed_from_u64(7));
/// let again = shuffle_with(&deck, &mut StdRng::seed_from_u64(7));
/// assert_eq!(once, again);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut deck = sequence.to_vec();
    let mut remaining = deck.len();
    while remaining > 1 {
        let chosen = rng.gen_range(0..remaining);
        remaining -= 1;
        deck.swap(remaining, chosen);
    }
    deck
}

/// Elements that expose methods by name.
///
/// Implement this for element types that [`invoke`] should be able to call
/// into. Return `None` for names the type does not know.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::{Invoke, invoke};
///
/// struct Word(&'static str);
///
/// impl Invoke<usize> for Word {
///     type Output = String;
///
///     fn invoke_method(&self, method: &str, times: &usize) -> Option<String> {
///         match method {
///             "repeat" => Some(self.0.repeat(*times)),
///             "upper" => Some(self.0.to_uppercase()),
///             _ => None,
///         }
///     }
/// }
///
/// let words = [Word("ab"), Word("c")];
/// assert_eq!(invoke(&words, "repeat", &2).unwrap(), vec!["abab", "cc"]);
/// assert!(invoke(&words, "reverse", &0).is_err());
/// ```
pub trait Invoke<A> {
    /// The value returned by every method.
    type Output;

    /// Calls the method named `method` with `arguments`, or returns `None`
    /// if this element has no such method.
    fn invoke_method(&self, method: &str, arguments: &A) -> Option<Self::Output>;
}

/// Calls the method named `method` on every element.
///
/// Results are collected in traversal order.
///
/// # Errors
///
/// Returns [`InvokeError::UnknownMethod`] for the first element that does
/// not provide `method`.
pub fn invoke<C, A>(
    collection: &C,
    method: &str,
    arguments: &A,
) -> Result<Vec<<C::Value as Invoke<A>>::Output>, InvokeError>
where
    C: Collection + ?Sized,
    C::Value: Invoke<A>,
{
    collection
        .entries()
        .enumerate()
        .map(|(index, (_, element))| {
            element
                .invoke_method(method, arguments)
                .ok_or_else(|| InvokeError::UnknownMethod {
                    method: method.to_string(),
                    index,
                })
        })
        .collect()
}

/// Calls `function(element, arguments)` for every element.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::invoke_with;
///
/// let names = ["ann", "bob"];
/// let greeted = invoke_with(&names, |name, greeting: &&str| format!("{greeting} {name}"), &"hi");
/// assert_eq!(greeted, vec!["hi ann", "hi bob"]);
/// ```
pub fn invoke_with<C, A, R, F>(collection: &C, mut function: F, arguments: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value, &A) -> R,
{
    map(collection, |element| function(element, arguments))
}

/// Orders two keys, sending incomparable ones (such as NaN) to the end.
fn compare_keys<K: PartialOrd>(left: &K, right: &K) -> Ordering {
    let left_comparable = left.partial_cmp(left).is_some();
    let right_comparable = right.partial_cmp(right).is_some();
    match (left_comparable, right_comparable) {
        (true, true) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Returns the indices of `keys` in stable ascending order.
///
/// Bottom-up merge sort. Each merge step only asks whether the right key is
/// strictly less than the left one, so an inconsistent comparison can
/// misplace elements but cannot break the merge.
fn stable_order<K: PartialOrd>(keys: &[K]) -> Vec<usize> {
    let length = keys.len();
    let mut order: Vec<usize> = (0..length).collect();
    let mut merged = Vec::with_capacity(length);
    let mut width = 1;
    while width < length {
        merged.clear();
        for start in (0..length).step_by(width * 2) {
            let middle = (start + width).min(length);
            let end = (start + width * 2).min(length);
            let (mut left, mut right) = (start, middle);
            while left < middle && right < end {
                if compare_keys(&keys[order[right]], &keys[order[left]]) == Ordering::Less {
                    merged.push(order[right]);
                    right += 1;
                } else {
                    merged.push(order[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&order[left..middle]);
            merged.extend_from_slice(&order[right..end]);
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }
    order
}

/// Rearranges `sequence` so that position `i` holds the element that was at
/// `order[i]`.
fn apply_order<T>(sequence: &mut [T], order: &[usize]) {
    for position in 0..order.len() {
        // Earlier swaps moved the element; follow the chain to where it is now.
        let mut source = order[position];
        while source < position {
            source = order[source];
        }
        sequence.swap(position, source);
    }
}

/// Sorts `sequence` in place, ascending by `projection`, and returns it.
///
/// The sort is stable. Keys that are not comparable with themselves (NaN)
/// are placed after every comparable key, keeping their input order.
/// Projections run once per element. Keys with only a partial order (two
/// keys neither less nor greater) are treated as equal, which may leave
/// the result only partially ordered but never panics.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::sort_by;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_by(&mut words, |word| word.len());
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by<T, K, F>(sequence: &mut [T], mut projection: F) -> &mut [T]
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let keys: Vec<K> = sequence.iter().map(&mut projection).collect();
    let order = stable_order(&keys);
    apply_order(sequence, &order);
    sequence
}

/// Sorts mapping elements in place by the value stored under `key`.
///
/// Elements without `key` sort before all others.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::sort_by_property;
/// use std::collections::HashMap;
///
/// let mut people = vec![
///     HashMap::from([("name", 3), ("age", 40)]),
///     HashMap::from([("name", 1), ("age", 25)]),
/// ];
/// sort_by_property(&mut people, &"age");
/// assert_eq!(people[0]["name"], 1);
/// ```
pub fn sort_by_property<'s, T, K, V>(sequence: &'s mut [T], key: &K) -> &'s mut [T]
where
    T: Mapping<K, V>,
    V: PartialOrd,
{
    let order = {
        let keys: Vec<Option<&V>> = sequence.iter().map(|element| element.lookup(key)).collect();
        stable_order(&keys)
    };
    apply_order(sequence, &order);
    sequence
}

/// Zips sequences together index by index.
///
/// Row `i` holds element `i` of every input, with `None` standing in for
/// inputs shorter than `i + 1`. The result has as many rows as the longest
/// input.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::zip;
///
/// let rows = zip(&[&[1, 2, 3][..], &[4, 5]]);
/// assert_eq!(
///     rows,
///     vec![vec![Some(1), Some(4)], vec![Some(2), Some(5)], vec![Some(3), None]]
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = sequences.iter().map(|sequence| sequence.len()).max().unwrap_or(0);
    (0..longest)
        .map(|index| map(sequences, |sequence| sequence.get(index).cloned()))
        .collect()
}

/// Zips two sequences of different element types.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::zip_pair;
///
/// let pairs = zip_pair(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(pairs[3], (Some('d'), None));
/// assert_eq!(pairs.len(), 4);
/// ```
pub fn zip_pair<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// Returns the elements of `first` that appear in every one of `others`.
///
/// Keeps `first`'s order and does not deduplicate it.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::intersection;
///
/// let shared = intersection(&[1, 2, 3], &[&[101, 2, 1, 10], &[2, 1]]);
/// assert_eq!(shared, vec![1, 2]);
/// ```
pub fn intersection<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    filter(first, |element| {
        every(others, |other| index_of(other, element).is_some())
    })
}

/// Returns the elements of `first` that appear in none of `others`.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::difference;
///
/// let unique = difference(&[1, 2, 3, 4], &[&[2, 30, 40], &[1, 11, 111]]);
/// assert_eq!(unique, vec![3, 4]);
/// ```
pub fn difference<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    filter(first, |element| {
        every(others, |other| index_of(other, element).is_none())
    })
}
