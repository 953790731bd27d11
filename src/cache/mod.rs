//! Cache Module
//!
//! Fixed-capacity key/value caches with pluggable eviction policies.

mod basic;
mod discard;
mod order;
pub mod policy;
mod store;


// Re-export public types
pub use basic::BasicCache;
pub use discard::{DiscardListener, LogDiscard};
pub use order::{Iter, KeyOrder};
pub use policy::{
    AnyPolicy, EvictionPolicy, FifoPolicy, LfuPolicy, LifoPolicy, LruPolicy, MruPolicy,
    PolicyKind,
};
pub use store::{BoundedCache, FifoCache, LfuCache, LifoCache, LruCache, MruCache};

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 4;
