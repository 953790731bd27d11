//! Basic Cache Module
//!
//! Unbounded dictionary cache sharing the put/get contract of the bounded
//! caches but never evicting.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

// == Basic Cache ==
/// Key/value store without a size limit.
#[derive(Debug)]
pub struct BasicCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for BasicCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> BasicCache<K, V>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites a value.
    pub fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Stores a value when both key and value are present.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.put(key, value);
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
