//! Integration Tests for Eviction Policies
//!
//! Drives each policy through the public API and checks which keys get
//! discarded.

use std::cell::RefCell;
use std::rc::Rc;

use bounded_cache::cache::{
    BoundedCache, EvictionPolicy, FifoCache, LfuCache, LifoCache, LruCache, LruPolicy, MruCache,
    PolicyKind, DEFAULT_CAPACITY,
};
use bounded_cache::Error;

// == Helper Functions ==

type Discards = Rc<RefCell<Vec<&'static str>>>;

/// Attaches a recording listener and returns the shared log.
fn recording<P>(
    cache: BoundedCache<&'static str, &'static str, P>,
) -> (BoundedCache<&'static str, &'static str, P>, Discards)
where
    P: EvictionPolicy<&'static str>,
{
    let log: Discards = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let cache = cache.with_listener(move |key: &&'static str| sink.borrow_mut().push(*key));
    (cache, log)
}

fn fill<P: EvictionPolicy<&'static str>>(
    cache: &mut BoundedCache<&'static str, &'static str, P>,
    keys: &[&'static str],
) {
    for key in keys {
        cache.put(*key, "value");
    }
}

// == FIFO ==

#[test]
fn test_fifo_discards_first_in() {
    let (mut cache, log) = recording(FifoCache::with_capacity(DEFAULT_CAPACITY).unwrap());
    fill(&mut cache, &["A", "B", "C", "D"]);

    cache.get(&"A");
    cache.put("E", "Battery");
    assert_eq!(*log.borrow(), vec!["A"]);

    cache.put("C", "Street");
    cache.put("F", "Mission");
    assert_eq!(*log.borrow(), vec!["A", "B"]);
    assert_eq!(cache.get(&"C"), Some(&"Street"));
}

// == LIFO ==

#[test]
fn test_lifo_discards_last_in() {
    let (mut cache, log) = recording(LifoCache::with_capacity(DEFAULT_CAPACITY).unwrap());
    fill(&mut cache, &["A", "B", "C", "D"]);

    cache.put("E", "Battery");
    assert_eq!(*log.borrow(), vec!["D"]);

    // Overwrite keeps C's position; E is still the last one in
    cache.put("C", "Street");
    cache.put("F", "Mission");
    assert_eq!(*log.borrow(), vec!["D", "E"]);

    cache.put("G", "San Francisco");
    assert_eq!(*log.borrow(), vec!["D", "E", "F"]);
    assert!(cache.contains(&"A"));
    assert!(cache.contains(&"G"));
}

// == LRU ==

#[test]
fn test_lru_refreshed_key_survives() {
    let (mut cache, log) = recording(LruCache::with_capacity(2).unwrap());
    fill(&mut cache, &["A", "B"]);

    cache.get(&"A");
    cache.put("C", "value");

    assert_eq!(*log.borrow(), vec!["B"]);
    assert!(cache.contains(&"A"));
}

#[test]
fn test_lru_overwrite_refreshes() {
    let (mut cache, log) = recording(LruCache::with_capacity(DEFAULT_CAPACITY).unwrap());
    fill(&mut cache, &["A", "B", "C", "D"]);

    cache.put("A", "again");
    cache.get(&"B");
    cache.put("E", "value");
    cache.put("F", "value");

    assert_eq!(*log.borrow(), vec!["C", "D"]);
}

// == MRU ==

#[test]
fn test_mru_discards_just_touched() {
    let (mut cache, log) = recording(MruCache::with_capacity(2).unwrap());
    fill(&mut cache, &["A", "B"]);

    cache.get(&"B");
    cache.put("C", "value");

    assert_eq!(*log.borrow(), vec!["B"]);
    assert!(cache.contains(&"A"));
    assert!(cache.contains(&"C"));
}

#[test]
fn test_mru_never_discards_incoming_key() {
    let (mut cache, log) = recording(MruCache::with_capacity(3).unwrap());
    fill(&mut cache, &["A", "B", "C"]);

    cache.get(&"A");
    cache.put("D", "value");
    cache.put("E", "value");

    // A was most recent, then D
    assert_eq!(*log.borrow(), vec!["A", "D"]);
    assert!(cache.contains(&"E"));
}

// == LFU ==

#[test]
fn test_lfu_discards_least_frequent() {
    let (mut cache, log) = recording(LfuCache::with_capacity(2).unwrap());
    fill(&mut cache, &["A", "B"]);

    cache.get(&"A");
    cache.put("C", "value");

    assert_eq!(*log.borrow(), vec!["B"]);
}

#[test]
fn test_lfu_tie_broken_by_recency() {
    let (mut cache, log) = recording(LfuCache::with_capacity(DEFAULT_CAPACITY).unwrap());
    fill(&mut cache, &["A", "B", "C", "D"]);

    for key in ["B", "A", "D", "C"] {
        cache.get(&key);
    }
    // All at frequency 2; B was touched longest ago
    cache.put("E", "value");
    assert_eq!(*log.borrow(), vec!["B"]);

    // E is alone at frequency 1
    cache.put("F", "value");
    assert_eq!(*log.borrow(), vec!["B", "E"]);

    cache.get(&"F");
    cache.get(&"F");
    cache.put("G", "value");
    // A, D, C tie at 2 and A is least recent
    assert_eq!(*log.borrow(), vec!["B", "E", "A"]);
    assert_eq!(cache.policy().frequency(&"F"), Some(3));
}

// == Shared Contract ==

#[test]
fn test_duplicate_puts_never_evict() {
    for kind in PolicyKind::ALL {
        let (mut cache, log) = recording(BoundedCache::from_kind(kind, 2).unwrap());
        fill(&mut cache, &["A", "B"]);
        for _ in 0..5 {
            cache.put("A", "again");
            cache.put("B", "again");
        }
        assert_eq!(cache.len(), 2, "policy {}", kind);
        assert!(log.borrow().is_empty(), "policy {}", kind);
    }
}

#[test]
fn test_absent_key_or_value_is_noop() {
    for kind in PolicyKind::ALL {
        let (mut cache, log) = recording(BoundedCache::from_kind(kind, 1).unwrap());
        cache.put("A", "value");

        assert_eq!(cache.put_opt(None, Some("x")), None);
        assert_eq!(cache.put_opt(Some("B"), None), None);

        assert_eq!(cache.len(), 1, "policy {}", kind);
        assert!(log.borrow().is_empty(), "policy {}", kind);
        assert_eq!(cache.get_opt::<&str>(None), None);
    }
}

#[test]
fn test_miss_changes_nothing() {
    for kind in PolicyKind::ALL {
        let mut cache = BoundedCache::from_kind(kind, 3).unwrap();
        cache.put(1, "one");
        cache.put(2, "two");
        let before: Vec<i32> = cache.keys().copied().collect();

        assert_eq!(cache.get(&99), None);

        let after: Vec<i32> = cache.keys().copied().collect();
        assert_eq!(before, after, "policy {}", kind);
    }
}

#[test]
fn test_prepopulated_policy_rejected() {
    let mut policy = LruPolicy::new();
    policy.on_insert(&"ghost");

    let result = LruCache::<&str, &str>::new(1, policy);
    assert!(matches!(result, Err(Error::PolicyNotEmpty(1))));
}
