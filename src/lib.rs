//! Bounded Cache - fixed-capacity in-memory caches
//!
//! Provides key/value caches with FIFO, LIFO, LRU, MRU and LFU eviction,
//! plus offset and index based pagination over a tabular dataset.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;

pub use cache::{BoundedCache, DiscardListener, EvictionPolicy, PolicyKind};
pub use config::Config;
pub use error::{Error, Result};
pub use pagination::{index_range, IndexedPaginator, Paginator};
