#![cfg(feature = "object")]
//! Tests for the mapping merge helpers.

use combinars::object::{Mapping, defaults, extend};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

#[rstest]
fn extend_later_sources_win() {
    let mut target = BTreeMap::from([("name", "moe")]);
    let first = BTreeMap::from([("age", "50"), ("name", "larry")]);
    let second = BTreeMap::from([("name", "curly")]);

    extend(&mut target, &[&first, &second]);
    assert_eq!(target, BTreeMap::from([("name", "curly"), ("age", "50")]));
}

#[rstest]
fn defaults_first_source_wins_for_missing_keys() {
    let mut target = BTreeMap::from([("flavor", "chocolate")]);
    let first = BTreeMap::from([("sprinkles", "lots")]);
    let second = BTreeMap::from([("sprinkles", "none"), ("flavor", "vanilla"), ("cone", "waffle")]);

    defaults(&mut target, &[&first, &second]);
    assert_eq!(
        target,
        BTreeMap::from([
            ("flavor", "chocolate"),
            ("sprinkles", "lots"),
            ("cone", "waffle"),
        ])
    );
}

#[rstest]
fn extend_with_no_sources_is_a_no_op() {
    let mut target = HashMap::from([(1, 'a')]);
    let sources: [&HashMap<i32, char>; 0] = [];
    extend(&mut target, &sources);
    assert_eq!(target, HashMap::from([(1, 'a')]));
}

#[rstest]
fn source_and_target_may_differ_in_mapping_type() {
    let mut target: HashMap<String, u32> = HashMap::new();
    let source = BTreeMap::from([("x".to_string(), 1), ("y".to_string(), 2)]);
    extend(&mut target, &[&source]);
    assert_eq!(target.lookup(&"y".to_string()), Some(&2));
    assert_eq!(target.len(), 2);
}

#[rstest]
fn helpers_return_target_for_chaining() {
    let mut target: BTreeMap<i32, i32> = BTreeMap::new();
    let source = BTreeMap::from([(1, 1)]);
    let fallback = BTreeMap::from([(1, 100), (2, 2)]);
    let merged = defaults(extend(&mut target, &[&source]), &[&fallback]);
    assert_eq!(merged.pairs().count(), 2);
    assert_eq!(merged.lookup(&1), Some(&1));
}

proptest! {
    /// extend never leaves a key of a source behind
    #[test]
    fn prop_extend_contains_all_source_keys(
        target in prop::collection::btree_map(0_u8..16, any::<i32>(), 0..10),
        source in prop::collection::btree_map(0_u8..16, any::<i32>(), 0..10),
    ) {
        let mut merged = target.clone();
        extend(&mut merged, &[&source]);
        for (key, value) in &source {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        prop_assert!(target.keys().all(|key| merged.contains_key(key)));
    }

    /// defaults never overwrites a key already present
    #[test]
    fn prop_defaults_preserves_existing_values(
        target in prop::collection::btree_map(0_u8..16, any::<i32>(), 0..10),
        source in prop::collection::btree_map(0_u8..16, any::<i32>(), 0..10),
    ) {
        let mut merged = target.clone();
        defaults(&mut merged, &[&source]);
        for (key, value) in &target {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        prop_assert!(source.keys().all(|key| merged.contains_key(key)));
    }
}
