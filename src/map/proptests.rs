//! Property-based tests for the concurrent map using proptest
//!
//! Single-threaded operation sequences are checked against a plain `HashMap`
//! oracle, with particular attention to the delete-on-absent-value contract.

use crate::map::ConcurrentMap;
use proptest::prelude::*;
use std::collections::HashMap;

/// One operation in a generated program
#[derive(Debug, Clone)]
enum Op {
    Set(u8, Option<i32>),
    Insert(u8, i32),
    Remove(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<u8>(), proptest::option::of(any::<i32>())).prop_map(|(k, v)| Op::Set(k, v)),
        (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        any::<u8>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn test_matches_hashmap_oracle(
        ops in prop::collection::vec(op_strategy(), 1..100)
    ) {
        let map = ConcurrentMap::new();
        let mut oracle: HashMap<u8, i32> = HashMap::new();

        for op in &ops {
            match *op {
                Op::Set(k, Some(v)) => {
                    map.set(k, Some(v));
                    oracle.insert(k, v);
                }
                Op::Set(k, None) => {
                    map.set(k, None);
                    oracle.remove(&k);
                }
                Op::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), oracle.insert(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), oracle.remove(&k));
                }
            }

            prop_assert_eq!(map.len(), oracle.len());
        }

        // Final contents agree key by key
        for k in 0..=u8::MAX {
            prop_assert_eq!(map.get(&k), oracle.get(&k).copied());
        }
    }

    #[test]
    fn test_set_absent_equals_remove(
        keys in prop::collection::vec(any::<u8>(), 1..30),
        victim in any::<u8>()
    ) {
        let via_set = ConcurrentMap::new();
        let via_remove = ConcurrentMap::new();

        for &k in &keys {
            via_set.insert(k, k as i32);
            via_remove.insert(k, k as i32);
        }

        via_set.set(victim, None);
        via_remove.remove(&victim);

        prop_assert_eq!(via_set.len(), via_remove.len());
        for k in 0..=u8::MAX {
            prop_assert_eq!(via_set.get(&k), via_remove.get(&k));
        }
    }

    #[test]
    fn test_overwrite_keeps_one_entry(
        key in any::<u8>(),
        values in prop::collection::vec(any::<i32>(), 1..20)
    ) {
        let map = ConcurrentMap::new();

        for &v in &values {
            map.set(key, Some(v));
        }

        prop_assert_eq!(map.len(), 1);
        prop_assert_eq!(map.get(&key), values.last().copied());
    }
}
