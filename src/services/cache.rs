// src/services/cache.rs
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;

struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// Time-bounded memoization, keyed however the caller likes. One instance per
/// concern: rate tables use a short window, synthetic series a long one.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, Entry<V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value if it is still within the freshness window.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).and_then(|entry| {
            if Utc::now() < entry.stored_at + self.ttl {
                Some(entry.value.clone())
            } else {
                None
            }
        })
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(
            key,
            Entry {
                value,
                stored_at: Utc::now(),
            },
        );
    }

    /// Fresh hit returns the cached value; otherwise the producer runs and its
    /// result is stored under the key.
    pub fn get_or_insert_with<F>(&mut self, key: K, produce: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = produce();
        self.insert(key, value.clone());
        value
    }
}
