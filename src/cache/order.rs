//! Key Order Module
//!
//! Arena-backed ordering of cache keys, shared by every eviction policy.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Key Order ==
/// Doubly linked sequence of keys stored in a slot vector.
///
/// Nodes live in `slots` and link to each other by slot index, so moving a
/// key to the back or unlinking it is O(1) without shared pointers. A
/// key→slot map gives O(1) lookup by key.
///
/// - Front = oldest / least recently touched
/// - Back = newest / most recently touched
#[derive(Debug)]
pub struct KeyOrder<K> {
    /// Node storage, `None` marks a free slot
    slots: Vec<Option<Node<K>>>,
    /// Free slots available for reuse
    free: Vec<usize>,
    /// Key to slot lookup
    index: HashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K> Default for KeyOrder<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyOrder<K>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new empty ordering.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty ordering with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // == Push Back ==
    /// Appends a new key at the back.
    ///
    /// Returns `false` and leaves the order untouched if the key is already
    /// tracked.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let node = Node {
            key: key.clone(),
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.index.insert(key, slot);
        self.attach_back(slot);
        true
    }

    // == Touch ==
    /// Moves an existing key to the back.
    ///
    /// Returns `false` if the key is not tracked.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.index.get(key) else {
            return false;
        };
        if self.tail != Some(slot) {
            self.detach(slot);
            self.attach_back(slot);
        }
        true
    }

    // == Remove ==
    /// Removes a key from the ordering.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&slot) => self.release(slot).is_some(),
            None => false,
        }
    }

    // == Pop ==
    /// Removes and returns the front (oldest) key.
    pub fn pop_front(&mut self) -> Option<K> {
        let slot = self.head?;
        self.release(slot)
    }

    /// Removes and returns the back (newest) key.
    pub fn pop_back(&mut self) -> Option<K> {
        let slot = self.tail?;
        self.release(slot)
    }

    // == Peek ==
    /// Returns the front (oldest) key without removing it.
    pub fn front(&self) -> Option<&K> {
        self.head.and_then(|slot| self.key_at(slot))
    }

    /// Returns the back (newest) key without removing it.
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|slot| self.key_at(slot))
    }

    // == Iteration ==
    /// Iterates keys from front (oldest) to back (newest).
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            order: self,
            current: self.head,
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    fn key_at(&self, slot: usize) -> Option<&K> {
        self.slots.get(slot)?.as_ref().map(|node| &node.key)
    }

    fn attach_back(&mut self, slot: usize) {
        let old_tail = self.tail;
        if let Some(node) = self.slots[slot].as_mut() {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => {
                if let Some(node) = self.slots[tail].as_mut() {
                    node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    fn detach(&mut self, slot: usize) {
        let (prev, next) = match self.slots[slot].as_mut() {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };
        match prev {
            Some(prev) => {
                if let Some(node) = self.slots[prev].as_mut() {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next) => {
                if let Some(node) = self.slots[next].as_mut() {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn release(&mut self, slot: usize) -> Option<K> {
        self.detach(slot);
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        self.index.remove(&node.key);
        Some(node.key)
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`KeyOrder`].
pub struct Iter<'a, K> {
    order: &'a KeyOrder<K>,
    current: Option<usize>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.current?;
        let node = self.order.slots.get(slot)?.as_ref()?;
        self.current = node.next;
        Some(&node.key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(order: &KeyOrder<&'static str>) -> Vec<&'static str> {
        order.iter().copied().collect()
    }

    #[test]
    fn test_order_new() {
        let order: KeyOrder<String> = KeyOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert_eq!(order.front(), None);
        assert_eq!(order.back(), None);
    }

    #[test]
    fn test_push_back_keeps_insertion_order() {
        let mut order = KeyOrder::new();
        order.push_back("a");
        order.push_back("b");
        order.push_back("c");

        assert_eq!(keys(&order), vec!["a", "b", "c"]);
        assert_eq!(order.front(), Some(&"a"));
        assert_eq!(order.back(), Some(&"c"));
    }

    #[test]
    fn test_push_back_existing_key_is_ignored() {
        let mut order = KeyOrder::new();
        assert!(order.push_back("a"));
        order.push_back("b");
        assert!(!order.push_back("a"));

        assert_eq!(order.len(), 2);
        assert_eq!(keys(&order), vec!["a", "b"]);
    }

    #[test]
    fn test_touch_moves_to_back() {
        let mut order = KeyOrder::new();
        order.push_back("a");
        order.push_back("b");
        order.push_back("c");

        assert!(order.touch("a"));
        assert_eq!(keys(&order), vec!["b", "c", "a"]);

        // Touching the back is a no-op
        assert!(order.touch("a"));
        assert_eq!(keys(&order), vec!["b", "c", "a"]);

        // Middle key
        assert!(order.touch("c"));
        assert_eq!(keys(&order), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_touch_missing_key() {
        let mut order = KeyOrder::new();
        order.push_back("a");
        assert!(!order.touch("zzz"));
        assert_eq!(keys(&order), vec!["a"]);
    }

    #[test]
    fn test_pop_front_and_back() {
        let mut order = KeyOrder::new();
        order.push_back("a");
        order.push_back("b");
        order.push_back("c");

        assert_eq!(order.pop_front(), Some("a"));
        assert_eq!(order.pop_back(), Some("c"));
        assert_eq!(order.pop_back(), Some("b"));
        assert_eq!(order.pop_back(), None);
        assert_eq!(order.pop_front(), None);
        assert!(order.is_empty());
    }

    #[test]
    fn test_remove_middle() {
        let mut order = KeyOrder::new();
        order.push_back("a");
        order.push_back("b");
        order.push_back("c");

        assert!(order.remove("b"));
        assert!(!order.remove("b"));

        assert_eq!(order.len(), 2);
        assert!(!order.contains("b"));
        assert_eq!(keys(&order), vec!["a", "c"]);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut order = KeyOrder::new();
        for round in 0..10 {
            order.push_back(round);
            order.push_back(round + 100);
            order.remove(&round);
            order.remove(&(round + 100));
        }
        assert!(order.is_empty());
        assert!(order.slots.len() <= 2);
    }

    #[test]
    fn test_string_keys_lookup_by_str() {
        let mut order: KeyOrder<String> = KeyOrder::new();
        order.push_back("key1".to_string());
        order.push_back("key2".to_string());

        assert!(order.touch("key1"));
        assert_eq!(order.front().map(String::as_str), Some("key2"));
        assert!(order.remove("key2"));
        assert_eq!(order.pop_front(), Some("key1".to_string()));
    }
}
