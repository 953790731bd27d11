//! Error types for the cache and pagination library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Error Enum ==
/// Unified error type for caches, paginators and configuration.
///
/// Misses are never errors: a missing key is `None` and a page past the end
/// of a dataset is an empty vector. Only precondition violations and dataset
/// I/O failures surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Cache constructed with a capacity of zero
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Policy handed to a new cache already tracks keys
    #[error("Policy already tracks {0} keys (must start empty)")]
    PolicyNotEmpty(usize),

    /// Page number below 1
    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(usize),

    /// Page size below 1
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    /// Start index outside the indexed dataset
    #[error("Index {index} out of range for dataset of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// Dataset source could not be read or parsed
    #[error("Failed to load dataset from {path}: {source}")]
    Dataset {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Unparseable command line
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Page could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
