//! Property-Based Tests for the Store Module
//!
//! Uses proptest to check the adapter contract against the in-memory backend.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::store::{KvStore, MemoryStore, Ttl};

// == Strategies ==
/// Generates valid keys (non-empty)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:]{1,64}".prop_map(|s| s)
}

/// Generates arbitrary byte payloads
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum StoreOp {
    Set { key: String, value: Vec<u8> },
    Delete { key: String },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    // Small key space so sets and deletes collide
    let key = "[a-c]";
    prop_oneof![
        (key, value_strategy()).prop_map(|(key, value)| StoreOp::Set { key, value }),
        key.prop_map(|key| StoreOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A set is visible to the next get with the exact bytes written.
    #[test]
    fn prop_set_then_get_returns_value(key in valid_key_strategy(), value in value_strategy()) {
        let store = MemoryStore::new();
        let fetched = tokio_test::block_on(async {
            store.set(&key, value.clone()).await.unwrap();
            store.get(&key).await.unwrap()
        });
        prop_assert_eq!(fetched, Some(value));
    }

    // Keys never written read as not found and have the absent TTL sentinel.
    #[test]
    fn prop_unset_key_not_found(key in valid_key_strategy()) {
        let store = MemoryStore::new();
        let (value, exists, ttl) = tokio_test::block_on(async {
            (
                store.get(&key).await.unwrap(),
                store.exists(&key).await.unwrap(),
                store.ttl(&key).await.unwrap(),
            )
        });
        prop_assert_eq!(value, None);
        prop_assert!(!exists);
        prop_assert_eq!(ttl.as_seconds(), -2);
    }

    // Delete reports true exactly once for a present key.
    #[test]
    fn prop_delete_is_idempotent(key in valid_key_strategy(), value in value_strategy()) {
        let store = MemoryStore::new();
        let (first, second, after) = tokio_test::block_on(async {
            store.set(&key, value).await.unwrap();
            let first = store.delete(&key).await.unwrap();
            let second = store.delete(&key).await.unwrap();
            (first, second, store.get(&key).await.unwrap())
        });
        prop_assert!(first);
        prop_assert!(!second);
        prop_assert_eq!(after, None);
    }

    // A key set with TTL d reports a remaining lifetime in [0, d].
    #[test]
    fn prop_ttl_within_bounds(key in valid_key_strategy(), secs in 1u64..100_000) {
        let store = MemoryStore::new();
        let ttl = tokio_test::block_on(async {
            store
                .set_with_ttl(&key, b"v".to_vec(), Duration::from_secs(secs))
                .await
                .unwrap();
            store.ttl(&key).await.unwrap()
        });
        match ttl {
            Ttl::Expires(remaining) => prop_assert!(remaining <= secs),
            other => prop_assert!(false, "unexpected ttl {:?}", other),
        }
    }

    // After any sequence of sets and deletes, the store agrees with a plain map.
    #[test]
    fn prop_matches_reference_model(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let store = MemoryStore::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                StoreOp::Set { key, value } => {
                    tokio_test::block_on(store.set(&key, value.clone())).unwrap();
                    model.insert(key, value);
                }
                StoreOp::Delete { key } => {
                    let removed = tokio_test::block_on(store.delete(&key)).unwrap();
                    prop_assert_eq!(removed, model.remove(&key).is_some());
                }
            }
        }

        for key in ["a", "b", "c"] {
            let stored = tokio_test::block_on(store.get(key)).unwrap();
            prop_assert_eq!(stored.as_ref(), model.get(key));
        }
    }

    // Long keys are stored like any other; only the empty key is refused.
    #[test]
    fn prop_long_keys_round_trip(len in 513usize..4096, value in value_strategy()) {
        let store = MemoryStore::new();
        let key = "k".repeat(len);
        let fetched = tokio_test::block_on(async {
            store.set(&key, value.clone()).await.unwrap();
            store.get(&key).await.unwrap()
        });
        prop_assert_eq!(fetched, Some(value));
    }
}
