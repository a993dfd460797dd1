#![cfg(test)]

// Property tests for IntHashTable: model equivalence plus lock-step
// agreement with the generic HashTable driven by the same hash.

use crate::hash_table::HashTable;
use crate::hashing::WangNaive;
use crate::int_hash_table::{IntHashTable, EMPTY_KEY};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Set(i32, i64),
    Remove(i32),
    Get(i32),
}

// Multiples of 16 and 256 pile into the same low buckets.
fn arb_key() -> impl Strategy<Value = i32> {
    prop_oneof![
        (1i32..64),
        (1i32..32).prop_map(|k| k * 16),
        (1i32..32).prop_map(|k| k * 256),
        any::<i32>().prop_filter("reserved key", |&k| k != EMPTY_KEY),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => (arb_key(), any::<i64>()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => arb_key().prop_map(Op::Remove),
        1 => arb_key().prop_map(Op::Get),
    ];
    proptest::collection::vec(op, 1..120)
}

// Property: IntHashTable matches a HashMap model after every operation, and
// lays out its slots exactly like HashTable<i32, _, WangNaive>.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_model_and_generic_twin(capacity in 0usize..32, ops in arb_ops()) {
        let mut sut: IntHashTable<i64> = IntHashTable::with_capacity(capacity);
        let mut twin: HashTable<i32, i64, WangNaive> = HashTable::with_capacity(capacity);
        let mut model: HashMap<i32, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    sut.set(k, v);
                    twin.set(k, v);
                    model.insert(k, v);
                }
                Op::Remove(k) => {
                    let expected = model.remove(&k).is_some();
                    prop_assert_eq!(sut.remove(k), expected);
                    prop_assert_eq!(twin.remove(&k), expected);
                    prop_assert!(!sut.contains_key(k));
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(k).ok(), model.get(&k));
                }
            }

            for (&k, v) in &model {
                prop_assert_eq!(sut.get(k), Ok(v));
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.capacity(), twin.capacity());

            let a: Vec<(i32, i64)> = sut.iter().map(|(k, &v)| (k, v)).collect();
            let b: Vec<(i32, i64)> = twin.iter().map(|(&k, &v)| (k, v)).collect();
            prop_assert_eq!(a, b);
        }
    }
}
