//! Cache Store Module
//!
//! Bounded cache engine combining HashMap storage with a pluggable eviction
//! policy and a discard notification hook.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{
    AnyPolicy, DiscardListener, EvictionPolicy, FifoPolicy, Iter, LfuPolicy, LifoPolicy,
    LogDiscard, LruPolicy, MruPolicy, PolicyKind,
};
use crate::error::{Error, Result};

pub type FifoCache<K, V> = BoundedCache<K, V, FifoPolicy<K>>;
pub type LifoCache<K, V> = BoundedCache<K, V, LifoPolicy<K>>;
pub type LruCache<K, V> = BoundedCache<K, V, LruPolicy<K>>;
pub type MruCache<K, V> = BoundedCache<K, V, MruPolicy<K>>;
pub type LfuCache<K, V> = BoundedCache<K, V, LfuPolicy<K>>;

// == Bounded Cache ==
/// Fixed-capacity key/value store.
///
/// The cache owns every stored value. The policy tracks exactly the keys in
/// `entries`; when a new key arrives at capacity the policy names a victim,
/// the victim is dropped and the listener is told about it before the new
/// key goes in. Overwrites never evict.
pub struct BoundedCache<K, V, P = AnyPolicy<K>> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Ordering state for eviction
    policy: P,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
    /// Receives every evicted key
    listener: Box<dyn DiscardListener<K>>,
}

impl<K, V, P> BoundedCache<K, V, P>
where
    K: Hash + Eq + Clone + fmt::Debug,
    P: EvictionPolicy<K>,
{
    // == Constructor ==
    /// Creates an empty cache around `policy`.
    ///
    /// Evicted keys are logged through [`LogDiscard`] until another listener
    /// is installed with [`with_listener`](Self::with_listener).
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero and
    /// [`Error::PolicyNotEmpty`] when `policy` already tracks keys.
    pub fn new(capacity: usize, policy: P) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        if !policy.is_empty() {
            return Err(Error::PolicyNotEmpty(policy.len()));
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            policy,
            capacity,
            listener: Box::new(LogDiscard),
        })
    }

    /// Creates an empty cache with a default-constructed policy.
    pub fn with_capacity(capacity: usize) -> Result<Self>
    where
        P: Default,
    {
        Self::new(capacity, P::default())
    }

    // == Listener ==
    /// Replaces the discard listener.
    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: DiscardListener<K> + 'static,
    {
        self.listener = Box::new(listener);
        self
    }

    // == Put ==
    /// Stores a value under `key`.
    ///
    /// An existing key is overwritten in place and counts as a touch. A new
    /// key at capacity first evicts the policy's victim.
    ///
    /// Returns the evicted key, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            self.policy.on_touch(&key);
            debug!(key = ?key, "cache entry overwritten");
            return None;
        }

        let discarded = if self.entries.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        self.policy.on_insert(&key);
        debug!(key = ?key, size = self.entries.len() + 1, "cache entry inserted");
        self.entries.insert(key, value);
        discarded
    }

    /// Stores a value when both key and value are present.
    ///
    /// A missing key or value is a no-op: nothing is stored, touched or
    /// evicted.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) -> Option<K> {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => None,
        }
    }

    // == Get ==
    /// Returns the value for `key`, touching it in the policy.
    ///
    /// A miss returns `None` and changes nothing.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (stored, _) = self.entries.get_key_value(key)?;
        self.policy.on_touch(stored);
        self.entries.get(key)
    }

    /// Like [`get`](Self::get), treating a missing key as a miss.
    pub fn get_opt<Q>(&mut self, key: Option<&Q>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key?)
    }

    // == Peek ==
    /// Returns the value for `key` without touching it.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Introspection ==
    /// Keys in the policy's internal order.
    pub fn keys(&self) -> Iter<'_, K> {
        self.policy.keys()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict(&mut self) -> Option<K> {
        let victim = self.policy.select_victim()?.clone();
        self.policy.on_remove(&victim);
        self.entries.remove(&victim);
        self.listener.on_discard(&victim);
        Some(victim)
    }
}

impl<K, V> BoundedCache<K, V, AnyPolicy<K>>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Creates a cache whose policy is chosen at runtime.
    pub fn from_kind(kind: PolicyKind, capacity: usize) -> Result<Self> {
        Self::new(capacity, AnyPolicy::new(kind))
    }
}

impl<K, V, P> fmt::Debug for BoundedCache<K, V, P>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("entries", &self.entries)
            .field("policy", &self.policy)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
