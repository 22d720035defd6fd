//! Property-based tests for the concurrent sequence using proptest
//!
//! Single-threaded operation sequences are checked against a plain `Vec`
//! oracle that replicates the tolerant out-of-range policies.

use crate::sequence::ConcurrentSequence;
use proptest::prelude::*;

/// One operation in a generated program
#[derive(Debug, Clone)]
enum Op {
    Append(i32),
    Insert(i32, usize),
    RemoveAt(usize),
    Remove(i32),
    Upsert(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Append),
        (any::<i32>(), 0usize..64).prop_map(|(v, i)| Op::Insert(v, i)),
        (0usize..64).prop_map(Op::RemoveAt),
        any::<i32>().prop_map(Op::Remove),
        any::<i32>().prop_map(Op::Upsert),
    ]
}

/// Apply one operation to the `Vec` oracle with the same tolerant policies
fn apply_to_oracle(oracle: &mut Vec<i32>, op: &Op) {
    match *op {
        Op::Append(v) => oracle.push(v),
        Op::Insert(v, i) => {
            if i < oracle.len() {
                oracle.insert(i, v);
            } else {
                oracle.push(v);
            }
        }
        Op::RemoveAt(i) => {
            if i < oracle.len() {
                oracle.remove(i);
            }
        }
        Op::Remove(v) => {
            if let Some(i) = oracle.iter().position(|&x| x == v) {
                oracle.remove(i);
            }
        }
        Op::Upsert(v) => match oracle.iter().position(|&x| x == v) {
            Some(i) => oracle[i] = v,
            None => oracle.push(v),
        },
    }
}

proptest! {
    #[test]
    fn test_matches_vec_oracle(
        ops in prop::collection::vec(op_strategy(), 1..100)
    ) {
        let seq = ConcurrentSequence::new();
        let mut oracle = Vec::new();

        for op in &ops {
            match *op {
                Op::Append(v) => seq.append(v),
                Op::Insert(v, i) => seq.insert(v, i),
                Op::RemoveAt(i) => seq.remove_at(i),
                Op::Remove(v) => {
                    let expected = oracle.iter().position(|&x| x == v);
                    prop_assert_eq!(seq.remove(&v), expected);
                }
                Op::Upsert(v) => seq.upsert(v),
            }
            apply_to_oracle(&mut oracle, op);

            prop_assert_eq!(seq.len(), oracle.len());
        }

        prop_assert_eq!(seq.to_vec(), oracle);
    }

    #[test]
    fn test_get_agrees_with_oracle(
        values in prop::collection::vec(any::<i32>(), 0..50),
        probe in 0usize..100
    ) {
        let seq = ConcurrentSequence::new();
        for &v in &values {
            seq.append(v);
        }

        prop_assert_eq!(seq.get(probe), values.get(probe).copied());
    }

    #[test]
    fn test_insert_past_end_equals_append(
        values in prop::collection::vec(any::<i32>(), 0..20),
        extra in any::<i32>(),
        offset in 0usize..10
    ) {
        let via_insert = ConcurrentSequence::new();
        let via_append = ConcurrentSequence::new();

        for &v in &values {
            via_insert.append(v);
            via_append.append(v);
        }

        via_insert.insert(extra, values.len() + offset);
        via_append.append(extra);

        prop_assert_eq!(via_insert.to_vec(), via_append.to_vec());
    }

    #[test]
    fn test_remove_at_past_end_is_noop(
        values in prop::collection::vec(any::<i32>(), 0..20),
        offset in 0usize..10
    ) {
        let seq = ConcurrentSequence::new();
        for &v in &values {
            seq.append(v);
        }

        seq.remove_at(values.len() + offset);

        prop_assert_eq!(seq.to_vec(), values);
    }

    #[test]
    fn test_upsert_never_duplicates(
        values in prop::collection::vec(-10i32..10, 1..50)
    ) {
        let seq = ConcurrentSequence::new();
        for &v in &values {
            seq.upsert(v);
        }

        // Each distinct value appears at most once
        let contents = seq.to_vec();
        let mut deduped = contents.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), contents.len());
    }
}
