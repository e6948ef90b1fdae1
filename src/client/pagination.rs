//! Page-by-page accumulation of list endpoints.

use core::future::Future;

use crate::error::{FireflyError, Result};
use crate::models::Pagination;

/// Default safety ceiling on the number of pages fetched for one list.
///
/// Reaching it means the server reports inconsistent pagination
/// metadata; it is never a normal end of data.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// One fetched page: its decoded items and the server's pagination
/// state.
#[derive(Debug)]
pub(crate) struct Page<T> {
    /// Items of this page.
    pub(crate) items: Vec<T>,
    /// Pagination metadata reported with the page.
    pub(crate) pagination: Pagination,
}

/// Fetches pages `1, 2, ...` with `fetch` and concatenates their items
/// in arrival order.
///
/// Stops after a page with no items or once the server reports the last
/// page. Any error aborts the whole accumulation.
///
/// # Errors
///
/// Propagates the first error returned by `fetch`, and returns
/// [`FireflyError::PageLimitExceeded`] if more than `max_pages` pages
/// would be needed.
pub(crate) async fn collect_pages<T, F, Fut>(
    path: &str,
    max_pages: u32,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page: u32 = 1;
    loop {
        if page > max_pages {
            tracing::warn!(path, limit = max_pages, "pagination ceiling reached, aborting");
            return Err(FireflyError::PageLimitExceeded {
                path: path.to_owned(),
                limit: max_pages,
            });
        }
        let Page {
            items: batch,
            pagination,
        } = fetch(page).await?;
        tracing::trace!(
            path,
            page,
            count = batch.len(),
            total_pages = pagination.total_pages,
            "fetched page"
        );
        if batch.is_empty() {
            break;
        }
        items.extend(batch);
        if pagination.is_last_page() {
            break;
        }
        page = page.saturating_add(1);
    }
    tracing::debug!(path, pages = page, items = items.len(), "pagination finished");
    Ok(items)
}
