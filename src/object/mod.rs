//! Merging helpers for keyed mappings.
//!
//! [`extend`] and [`defaults`] copy entries from any number of source
//! mappings into a target mapping, which is modified in place and returned
//! for chaining. Both work over the [`Mapping`] trait, implemented for
//! `HashMap` and `BTreeMap`; source and target may be different mapping
//! types as long as key and value types agree.
//!
//! # Examples
//!
//! ```rust
//! use combinars::object::{defaults, extend};
//! use std::collections::BTreeMap;
//!
//! let mut settings = BTreeMap::from([("color", "red")]);
//! extend(&mut settings, &[&BTreeMap::from([("size", "large")])]);
//! defaults(&mut settings, &[&BTreeMap::from([("color", "blue"), ("shape", "round")])]);
//!
//! assert_eq!(
//!     settings,
//!     BTreeMap::from([("color", "red"), ("size", "large"), ("shape", "round")])
//! );
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A keyed mapping that can be read and written entry by entry.
pub trait Mapping<K, V> {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Stores `value` under `key`, replacing any previous value.
    fn assign(&mut self, key: K, value: V);

    /// Returns an iterator over all entries in enumeration order.
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    #[inline]
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    #[inline]
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

/// Copies every entry of every source into `target`.
///
/// Later sources overwrite earlier ones, and every source overwrites keys
/// already present in `target`.
///
/// # Examples
///
/// ```rust
/// use combinars::object::extend;
/// use std::collections::HashMap;
///
/// let mut target = HashMap::from([("a", 1), ("b", 2)]);
/// let first = HashMap::from([("b", 20), ("c", 30)]);
/// let second = HashMap::from([("c", 300)]);
///
/// extend(&mut target, &[&first, &second]);
/// assert_eq!(target, HashMap::from([("a", 1), ("b", 20), ("c", 300)]));
/// ```
pub fn extend<'t, T, S, K, V>(target: &'t mut T, sources: &[&S]) -> &'t mut T
where
    T: Mapping<K, V>,
    S: Mapping<K, V>,
    K: Clone,
    V: Clone,
{
    for source in sources {
        for (key, value) in source.pairs() {
            target.assign(key.clone(), value.clone());
        }
    }
    target
}

/// Fills in keys of `target` that are absent, leaving existing ones alone.
///
/// For a key missing from `target`, the first source that defines it wins.
///
/// # Examples
///
/// ```rust
/// use combinars::object::defaults;
/// use std::collections::HashMap;
///
/// let mut order = HashMap::from([("flavor", "chocolate")]);
/// let fallback = HashMap::from([("flavor", "vanilla"), ("sprinkles", "lots")]);
///
/// defaults(&mut order, &[&fallback]);
/// assert_eq!(order, HashMap::from([("flavor", "chocolate"), ("sprinkles", "lots")]));
/// ```
pub fn defaults<'t, T, S, K, V>(target: &'t mut T, sources: &[&S]) -> &'t mut T
where
    T: Mapping<K, V>,
    S: Mapping<K, V>,
    K: Clone,
    V: Clone,
{
    for source in sources {
        for (key, value) in source.pairs() {
            if target.lookup(key).is_none() {
                target.assign(key.clone(), value.clone());
            }
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn extend_returns_the_target_for_chaining() {
        let mut target: BTreeMap<&str, i32> = BTreeMap::new();
        let source = BTreeMap::from([("x", 1)]);
        let returned = extend(&mut target, &[&source]);
        returned.assign("y", 2);
        assert_eq!(target, BTreeMap::from([("x", 1), ("y", 2)]));
    }

    #[rstest]
    fn extend_with_no_sources_leaves_target_untouched() {
        let mut target = BTreeMap::from([("x", 1)]);
        let sources: [&BTreeMap<&str, i32>; 0] = [];
        extend(&mut target, &sources);
        assert_eq!(target, BTreeMap::from([("x", 1)]));
    }

    #[rstest]
    fn extend_accepts_a_different_source_mapping_type() {
        let mut target: HashMap<String, i32> = HashMap::new();
        let source = BTreeMap::from([("k".to_string(), 5)]);
        extend(&mut target, &[&source]);
        assert_eq!(target.get("k"), Some(&5));
    }

    fn total<M: Mapping<String, i32>>(mapping: &M) -> i32 {
        mapping.pairs().map(|(_, value)| *value).sum()
    }

    #[rstest]
    fn pairs_is_usable_through_a_generic_bound() {
        let hashed: HashMap<String, i32> = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        let ordered: BTreeMap<String, i32> = BTreeMap::from([("c".to_string(), 4)]);
        assert_eq!(total(&hashed), 3);
        assert_eq!(total(&ordered), 4);
    }

    #[rstest]
    fn defaults_first_source_wins_for_absent_key() {
        let mut target: BTreeMap<&str, i32> = BTreeMap::new();
        let first = BTreeMap::from([("a", 1)]);
        let second = BTreeMap::from([("a", 2), ("b", 3)]);
        defaults(&mut target, &[&first, &second]);
        assert_eq!(target, BTreeMap::from([("a", 1), ("b", 3)]));
    }
}
