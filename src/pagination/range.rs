//! Index range arithmetic for offset-based paging.

use crate::error::{Error, Result};

// == Index Range ==
/// Returns the `[start, end)` row range of a 1-based `page`.
///
/// `end` is exclusive and may run past the dataset; callers clip it.
/// Arithmetic saturates, so absurd page numbers land past any dataset
/// instead of wrapping.
///
/// # Errors
/// [`Error::InvalidPage`] when `page` is 0, [`Error::InvalidPageSize`] when
/// `page_size` is 0.
pub fn index_range(page: usize, page_size: usize) -> Result<(usize, usize)> {
    if page == 0 {
        return Err(Error::InvalidPage(page));
    }
    if page_size == 0 {
        return Err(Error::InvalidPageSize(page_size));
    }
    let start = (page - 1).saturating_mul(page_size);
    Ok((start, start.saturating_add(page_size)))
}
