//! Most Recently Used policy.

use std::hash::Hash;

use super::{EvictionPolicy, PolicyKind};
use crate::cache::order::{Iter, KeyOrder};

// == MRU Policy ==
/// Evicts the key that was touched most recently.
///
/// Shares the LRU ordering but picks from the other end. The cache asks for
/// a victim before the incoming key is placed, so the incoming key is never
/// its own victim.
#[derive(Debug)]
pub struct MruPolicy<K> {
    order: KeyOrder<K>,
}

impl<K> MruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            order: KeyOrder::new(),
        }
    }
}

impl<K> Default for MruPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for MruPolicy<K>
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
        PolicyKind::Mru
    }
}
