//! Discard Notification Module
//!
//! Hook invoked once for every key a cache evicts.

use std::fmt::Debug;

use tracing::info;

// == Discard Listener ==
/// Receives the key of every evicted entry.
///
/// Any `FnMut(&K)` closure is a listener, so callers can collect, count or
/// forward discards without a dedicated type.
pub trait DiscardListener<K> {
    fn on_discard(&mut self, key: &K);
}

impl<K, F> DiscardListener<K> for F
where
    F: FnMut(&K),
{
    fn on_discard(&mut self, key: &K) {
        self(key)
    }
}

// == Log Discard ==
/// Default listener: logs `DISCARD: <key>` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiscard;

impl<K: Debug> DiscardListener<K> for LogDiscard {
    fn on_discard(&mut self, key: &K) {
        info!("DISCARD: {:?}", key);
    }
}
