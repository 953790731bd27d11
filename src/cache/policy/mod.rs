//! Eviction Policies
//!
//! Each policy owns the ordering metadata for the keys of one cache and
//! decides which key goes when the cache is full.

mod fifo;
mod lfu;
mod lifo;
mod lru;
mod mru;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::order::Iter;
use crate::error::Error;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lifo::LifoPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;

// == Eviction Policy ==
/// Ordering strategy plugged into a [`BoundedCache`](crate::cache::BoundedCache).
///
/// The cache calls `on_insert` for every new key, `on_touch` for every hit
/// or overwrite, and `select_victim` followed by `on_remove` when a new key
/// arrives at capacity. A policy tracks exactly the keys present in the
/// cache.
pub trait EvictionPolicy<K> {
    /// Records a key that was just added to the cache.
    fn on_insert(&mut self, key: &K);

    /// Records a read or overwrite of a present key.
    fn on_touch(&mut self, key: &K);

    /// Returns the key that should be evicted next, without removing it.
    fn select_victim(&self) -> Option<&K>;

    /// Forgets a key that has left the cache.
    fn on_remove(&mut self, key: &K);

    /// Iterates tracked keys in the policy's internal order.
    fn keys(&self) -> Iter<'_, K>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> PolicyKind;
}

// == Policy Kind ==
/// Names the available policies, used for runtime selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Fifo,
    Lifo,
    Lru,
    Mru,
    Lfu,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Lfu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown eviction policy '{}'", s)))
    }
}

// == Any Policy ==
/// Closed set of policies, chosen once per cache at runtime.
#[derive(Debug)]
pub enum AnyPolicy<K> {
    Fifo(FifoPolicy<K>),
    Lifo(LifoPolicy<K>),
    Lru(LruPolicy<K>),
    Mru(MruPolicy<K>),
    Lfu(LfuPolicy<K>),
}

impl<K> AnyPolicy<K>
where
    K: Hash + Eq + Clone,
{
    pub fn new(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Fifo => AnyPolicy::Fifo(FifoPolicy::new()),
            PolicyKind::Lifo => AnyPolicy::Lifo(LifoPolicy::new()),
            PolicyKind::Lru => AnyPolicy::Lru(LruPolicy::new()),
            PolicyKind::Mru => AnyPolicy::Mru(MruPolicy::new()),
            PolicyKind::Lfu => AnyPolicy::Lfu(LfuPolicy::new()),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $policy:ident => $body:expr) => {
        match $self {
            AnyPolicy::Fifo($policy) => $body,
            AnyPolicy::Lifo($policy) => $body,
            AnyPolicy::Lru($policy) => $body,
            AnyPolicy::Mru($policy) => $body,
            AnyPolicy::Lfu($policy) => $body,
        }
    };
}

impl<K> EvictionPolicy<K> for AnyPolicy<K>
where
    K: Hash + Eq + Clone,
{
    fn on_insert(&mut self, key: &K) {
        dispatch!(self, p => p.on_insert(key))
    }

    fn on_touch(&mut self, key: &K) {
        dispatch!(self, p => p.on_touch(key))
    }

    fn select_victim(&self) -> Option<&K> {
        dispatch!(self, p => p.select_victim())
    }

    fn on_remove(&mut self, key: &K) {
        dispatch!(self, p => p.on_remove(key))
    }

    fn keys(&self) -> Iter<'_, K> {
        dispatch!(self, p => p.keys())
    }

    fn len(&self) -> usize {
        dispatch!(self, p => p.len())
    }

    fn kind(&self) -> PolicyKind {
        dispatch!(self, p => p.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_from_str() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!(" lfu ".parse::<PolicyKind>().unwrap(), PolicyKind::Lfu);
        assert!(matches!(
            "clock".parse::<PolicyKind>(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_policy_kind_display_round_trips() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_policy_kind_serde() {
        let json = serde_json::to_string(&PolicyKind::Mru).unwrap();
        assert_eq!(json, r#""mru""#);
        let kind: PolicyKind = serde_json::from_str(r#""lifo""#).unwrap();
        assert_eq!(kind, PolicyKind::Lifo);
    }

    #[test]
    fn test_any_policy_reports_kind() {
        for kind in PolicyKind::ALL {
            let policy: AnyPolicy<u32> = AnyPolicy::new(kind);
            assert_eq!(policy.kind(), kind);
            assert!(policy.is_empty());
        }
    }

    #[test]
    fn test_any_policy_dispatches() {
        let mut policy = AnyPolicy::new(PolicyKind::Lru);
        policy.on_insert(&1);
        policy.on_insert(&2);
        policy.on_touch(&1);
        assert_eq!(policy.select_victim(), Some(&2));
        policy.on_remove(&2);
        assert_eq!(policy.keys().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(policy.len(), 1);
    }
}
