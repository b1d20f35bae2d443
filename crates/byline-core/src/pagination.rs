//! Pagination arithmetic for the post listing.

use serde::Serialize;

/// Default page size when the request names none.
pub const DEFAULT_LIMIT: u64 = 10;

/// One page of results plus the metadata the listing endpoint exposes.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_posts: u64,
}

impl<T> Page<T> {
    /// Assemble a page from a fetched window and the total match count.
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        Self {
            items,
            total_pages: total_pages(total, limit),
            current_page: page,
            total_posts: total,
        }
    }
}

/// `ceil(total / limit)`, 0 when nothing matches.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit)
}

/// Offset of the first record on a 1-based page. Requesting a page past
/// the end is allowed and simply lands beyond the data.
pub fn offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1) * limit
}
