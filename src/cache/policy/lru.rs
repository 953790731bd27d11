//! Least Recently Used policy.

use std::hash::Hash;

use super::{EvictionPolicy, PolicyKind};
use crate::cache::order::{Iter, KeyOrder};

// == LRU Policy ==
/// Evicts the key that was touched least recently.
///
/// Order runs from least recent (front) to most recent (back). Inserts
/// land at the back and every touch moves the key there.
#[derive(Debug)]
pub struct LruPolicy<K> {
    order: KeyOrder<K>,
}

impl<K> LruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            order: KeyOrder::new(),
        }
    }
}

impl<K> Default for LruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn on_insert(&mut self, key: &K) {
        if !self.order.push_back(key.clone()) {
            self.order.touch(key);
        }
    }

    fn on_touch(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn select_victim(&self) -> Option<&K> {
        self.order.front()
    }

    fn on_remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn keys(&self) -> Iter<'_, K> {
        self.order.iter()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }
}
