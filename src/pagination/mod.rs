//! Pagination Module
//!
//! Page arithmetic and dataset-backed paginators. Offset pages shift when
//! rows are deleted; index pages do not.

mod dataset;
mod range;
mod server;


pub use dataset::{CsvFile, DatasetSource, Row, StaticRows};
pub use range::index_range;
pub use server::{IndexedPaginator, Paginator};

// == Public Constants ==
/// Page requested when none is given
pub const DEFAULT_PAGE: usize = 1;

/// Rows per page when none is given
pub const DEFAULT_PAGE_SIZE: usize = 10;
