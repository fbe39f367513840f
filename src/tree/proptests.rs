use super::subtree::{Color, Subtree};
use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

/// Walks the whole tree and checks every structural invariant.
///
/// Returns the black height so callers can compare siblings.
fn validate_subtree<V>(
    subtree: &Subtree<V>,
    lower: Option<&str>,
    upper: Option<&str>,
) -> usize {
    match subtree {
        Subtree::Sentinel => 1,
        Subtree::Node(node) => {
            if let Some(lower) = lower {
                assert!(node.key.as_str() > lower, "key {:?} out of order", node.key);
            }
            if let Some(upper) = upper {
                assert!(node.key.as_str() < upper, "key {:?} out of order", node.key);
            }

            assert!(
                !node.right.is_red(),
                "red right link below {:?}",
                node.key
            );
            if node.color == Color::Red {
                assert!(
                    !node.left.is_red(),
                    "two consecutive red left links at {:?}",
                    node.key
                );
            }

            let left = validate_subtree(&node.left, lower, Some(node.key.as_str()));
            let right = validate_subtree(&node.right, Some(node.key.as_str()), upper);
            assert_eq!(left, right, "black imbalance below {:?}", node.key);

            left + usize::from(node.color == Color::Black)
        }
    }
}

fn validate_map<V>(map: &RbTreeMap<V>) {
    assert!(map.root.is_black(), "root must be black");
    validate_subtree(&map.root, None, None);
    assert_eq!(map.entries().len(), map.len(), "length must match node count");
}

fn ceil_log2(value: usize) -> usize {
    value.next_power_of_two().trailing_zeros() as usize
}

#[test]
fn ascending_keys_stay_balanced() {
    let mut map = RbTreeMap::new();
    for index in 0..1000 {
        map.put(format!("{index:05}"), index);
        validate_map(&map);
    }
    assert!(map.height() <= ceil_log2(1001));
}

#[test]
fn descending_keys_stay_balanced() {
    let mut map = RbTreeMap::new();
    for index in (0..1000).rev() {
        map.put(format!("{index:05}"), index);
    }
    validate_map(&map);
    assert!(map.height() <= ceil_log2(1001));
}

#[test]
fn overwrite_keeps_invariants() {
    let mut map = RbTreeMap::new();
    for round in 0..3 {
        for index in 0..200 {
            map.put(format!("k{index}"), round);
            validate_map(&map);
        }
    }
    assert_eq!(map.len(), 200);
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,6}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_put(
        keys in prop::collection::vec(key_strategy(), 0..200)
    ) {
        let mut map = RbTreeMap::new();
        for (index, key) in keys.iter().enumerate() {
            map.put(key.clone(), index);
            validate_map(&map);
        }
    }

    #[test]
    fn matches_btreemap_model(
        entries in prop::collection::vec((key_strategy(), any::<u16>()), 0..300)
    ) {
        let mut map = RbTreeMap::new();
        let mut model = BTreeMap::new();
        for (key, value) in &entries {
            map.put(key.clone(), *value);
            model.insert(key.clone(), *value);
        }

        prop_assert_eq!(map.len(), model.len());
        let actual: Vec<(String, u16)> = map
            .entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect();
        let expected: Vec<(String, u16)> = model.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn height_is_logarithmic(count in 0usize..2000) {
        let mut map = RbTreeMap::new();
        for index in 0..count {
            map.put(format!("{index:06}"), ());
        }
        prop_assert!(map.height() <= ceil_log2(count + 1));
    }
}
