//! Response models for paginated reads
//!
//! Serializable page envelopes handed to whatever presents the data.

pub mod pages;

pub use pages::{HyperIndexPage, HyperPage};
