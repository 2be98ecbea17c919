//! Fixed-size, 1-based pagination.

use std::ops::Range;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `total` rows: `ceil(total / page_size)`.
///
/// Zero rows yield zero pages. A zero page size is treated as one.
#[must_use]
pub const fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 { 1 } else { page_size };
    total.div_ceil(page_size)
}

/// Index range of `page` (1-based) within a list of `total` rows.
///
/// Page `n` covers `[(n - 1) * page_size, n * page_size)`, cut at `total`.
/// Pages past the end yield an empty range; page 0 is treated as page 1.
#[must_use]
pub fn page_range(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = page.saturating_mul(page_size).min(total);
    start..end
}

/// Clamp a requested page into `1..=page_count`.
///
/// With no pages at all the result is 1.
#[must_use]
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}
