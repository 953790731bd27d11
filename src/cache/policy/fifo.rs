//! First-In First-Out policy.

use std::hash::Hash;

use super::{EvictionPolicy, PolicyKind};
use crate::cache::order::{Iter, KeyOrder};

// == FIFO Policy ==
/// Evicts the oldest inserted key. Reads and overwrites never reorder.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    order: KeyOrder<K>,
}

impl<K> FifoPolicy<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            order: KeyOrder::new(),
        }
    }
}

impl<K> Default for FifoPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn on_insert(&mut self, key: &K) {
        self.order.push_back(key.clone());
    }

    fn on_touch(&mut self, _key: &K) {}

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
        PolicyKind::Fifo
    }
}
