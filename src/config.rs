//! Configuration Module
//!
//! Handles loading and validating settings from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::{PolicyKind, DEFAULT_CAPACITY};
use crate::error::{Error, Result};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Dataset read when `DATA_FILE` is not set
pub const DEFAULT_DATA_FILE: &str = "Popular_Baby_Names.csv";

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy for the cache
    pub policy: PolicyKind,
    /// CSV dataset served by the paginators
    pub data_file: PathBuf,
    /// Rows per page when a command omits the size
    pub page_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 4)
    /// - `CACHE_POLICY` - fifo, lifo, lru, mru or lfu (default: lru)
    /// - `DATA_FILE` - CSV dataset path (default: Popular_Baby_Names.csv)
    /// - `PAGE_SIZE` - Default rows per page (default: 10)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Unset variables take their defaults; set but malformed ones are
    /// errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            capacity: match lookup("CACHE_CAPACITY") {
                Some(raw) => parse_count("CACHE_CAPACITY", &raw)?,
                None => defaults.capacity,
            },
            policy: match lookup("CACHE_POLICY") {
                Some(raw) => raw.parse()?,
                None => defaults.policy,
            },
            data_file: lookup("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            page_size: match lookup("PAGE_SIZE") {
                Some(raw) => parse_count("PAGE_SIZE", &raw)?,
                None => defaults.page_size,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero capacity and zero page size.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

fn parse_count(name: &str, raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| {
        Error::Config(format!(
            "{} must be a non-negative integer, got '{}'",
            name, raw
        ))
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: PolicyKind::Lru,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
