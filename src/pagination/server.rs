//! Paginators
//!
//! Offset-based and index-based readers over a lazily loaded dataset.

use std::collections::BTreeMap;

use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{HyperIndexPage, HyperPage};
use crate::pagination::{index_range, DatasetSource, Row};

// == Paginator ==
/// Offset-based pages over a dataset loaded on first use.
///
/// The source is read once, its header row dropped, and the rows kept for
/// the lifetime of the paginator. A failed load is not cached, so the next
/// call retries it.
#[derive(Debug)]
pub struct Paginator<S> {
    source: S,
    dataset: OnceCell<Vec<Row>>,
}

impl<S: DatasetSource> Paginator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            dataset: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // == Dataset ==
    /// Data rows without the header.
    pub fn dataset(&self) -> Result<&[Row]> {
        self.dataset
            .get_or_try_init(|| {
                let rows: Vec<Row> = self.source.read_rows()?.into_iter().skip(1).collect();
                debug!(
                    source = %self.source.describe(),
                    rows = rows.len(),
                    "dataset loaded"
                );
                Ok(rows)
            })
            .map(Vec::as_slice)
    }

    // == Get Page ==
    /// Rows of 1-based `page`, clipped to the dataset.
    ///
    /// A page past the end is empty, not an error.
    pub fn get_page(&self, page: usize, page_size: usize) -> Result<&[Row]> {
        let (start, end) = index_range(page, page_size)?;
        Ok(clip(self.dataset()?, start, end))
    }

    // == Get Hyper ==
    /// [`get_page`](Self::get_page) plus navigation metadata.
    pub fn get_hyper(&self, page: usize, page_size: usize) -> Result<HyperPage<'_>> {
        let (start, end) = index_range(page, page_size)?;
        let dataset = self.dataset()?;
        let total = dataset.len();
        let data = clip(dataset, start, end);

        Ok(HyperPage {
            page_size: data.len(),
            page,
            data,
            next_page: (end < total).then(|| page + 1),
            prev_page: (page > 1).then(|| page - 1),
            total_pages: total.div_ceil(page_size),
        })
    }
}

fn clip(rows: &[Row], start: usize, end: usize) -> &[Row] {
    if start >= rows.len() {
        return &[];
    }
    &rows[start..end.min(rows.len())]
}

// == Indexed Paginator ==
/// Index-based pages that survive row deletions.
///
/// Every row keeps the position it had when the dataset was loaded. Removed
/// positions are skipped, so a `next_index` handed out earlier still points
/// at the following live row.
#[derive(Debug)]
pub struct IndexedPaginator<S> {
    paginator: Paginator<S>,
    indexed: OnceCell<BTreeMap<usize, Row>>,
}

impl<S: DatasetSource> IndexedPaginator<S> {
    pub fn new(source: S) -> Self {
        Self {
            paginator: Paginator::new(source),
            indexed: OnceCell::new(),
        }
    }

    /// Offset-based view over the same loaded rows.
    ///
    /// Deletions made through [`remove`](Self::remove) are not visible here.
    pub fn paginator(&self) -> &Paginator<S> {
        &self.paginator
    }

    /// Data rows as loaded, ignoring deletions.
    pub fn dataset(&self) -> Result<&[Row]> {
        self.paginator.dataset()
    }

    // == Indexed Dataset ==
    /// Live rows keyed by their original position.
    pub fn indexed_dataset(&self) -> Result<&BTreeMap<usize, Row>> {
        self.indexed.get_or_try_init(|| {
            let rows = self.paginator.dataset()?;
            Ok(rows.iter().cloned().enumerate().collect())
        })
    }

    // == Remove ==
    /// Deletes the row at `index`, returning it if it was still present.
    pub fn remove(&mut self, index: usize) -> Result<Option<Row>> {
        self.indexed_dataset()?;
        let removed = self
            .indexed
            .get_mut()
            .and_then(|rows| rows.remove(&index));
        if removed.is_some() {
            debug!(index, "dataset row removed");
        }
        Ok(removed)
    }

    // == Get Hyper Index ==
    /// Up to `page_size` live rows starting at position `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] when `index` is not below the number of
    /// loaded rows, [`Error::InvalidPageSize`] when `page_size` is 0.
    pub fn get_hyper_index(&self, index: usize, page_size: usize) -> Result<HyperIndexPage<'_>> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        let len = self.dataset()?.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let mut live = self.indexed_dataset()?.range(index..);
        let data: Vec<&Row> = live.by_ref().take(page_size).map(|(_, row)| row).collect();
        let next_index = live.next().map(|(position, _)| *position);

        Ok(HyperIndexPage {
            index,
            next_index,
            page_size: data.len(),
            data,
        })
    }
}
