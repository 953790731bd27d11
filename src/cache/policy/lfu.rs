//! Least Frequently Used policy with least-recently-used tie-break.

use std::collections::HashMap;
use std::hash::Hash;

use super::{EvictionPolicy, PolicyKind};
use crate::cache::order::{Iter, KeyOrder};

// == LFU Policy ==
/// Evicts the key with the lowest use count.
///
/// A key starts at frequency 1 when inserted and gains 1 for every hit or
/// overwrite. Ties on the lowest frequency go to the least recently touched
/// key, tracked with the same ordering LRU uses.
///
/// Victim selection scans the recency order once, so it is O(capacity).
#[derive(Debug)]
pub struct LfuPolicy<K> {
    /// Recency order, least recent at the front
    recency: KeyOrder<K>,
    /// Use count per key
    frequency: HashMap<K, u64>,
}

impl<K> LfuPolicy<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            recency: KeyOrder::new(),
            frequency: HashMap::new(),
        }
    }

    /// Returns the use count recorded for `key`.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.frequency.get(key).copied()
    }
}

impl<K> Default for LfuPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn on_insert(&mut self, key: &K) {
        if self.recency.push_back(key.clone()) {
            self.frequency.insert(key.clone(), 1);
        } else {
            self.on_touch(key);
        }
    }

    fn on_touch(&mut self, key: &K) {
        if let Some(count) = self.frequency.get_mut(key) {
            *count += 1;
            self.recency.touch(key);
        }
    }

    fn select_victim(&self) -> Option<&K> {
        let mut victim: Option<(&K, u64)> = None;
        // Least recent first: on equal counts the first seen wins
        for key in self.recency.iter() {
            let count = self.frequency.get(key).copied().unwrap_or(0);
            match victim {
                Some((_, lowest)) if lowest <= count => {}
                _ => victim = Some((key, count)),
            }
        }
        victim.map(|(key, _)| key)
    }

    fn on_remove(&mut self, key: &K) {
        self.recency.remove(key);
        self.frequency.remove(key);
    }

    fn keys(&self) -> Iter<'_, K> {
        self.recency.iter()
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }
}
