//! Last-In First-Out policy.

use std::hash::Hash;

use super::{EvictionPolicy, PolicyKind};
use crate::cache::order::{Iter, KeyOrder};

// == LIFO Policy ==
/// Evicts the most recently inserted key still present.
///
/// Eviction happens on the next new key, so the victim is the key pushed
/// in just before it. Reads and overwrites never reorder.
#[derive(Debug)]
pub struct LifoPolicy<K> {
    order: KeyOrder<K>,
}

impl<K> LifoPolicy<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            order: KeyOrder::new(),
        }
    }
}

impl<K> Default for LifoPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LifoPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn on_insert(&mut self, key: &K) {
        self.order.push_back(key.clone());
    }

    fn on_touch(&mut self, _key: &K) {}

    fn select_victim(&self) -> Option<&K> {
        self.order.back()
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
        PolicyKind::Lifo
    }
}
