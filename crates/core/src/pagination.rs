//! Page-number pagination (`?page=N`) with a fixed page size.
//!
//! Pages are 1-based. The page count uses ceiling division, so a partially
//! filled last page still counts as a page and an empty table has zero pages.

/// Number of customer rows returned per page by `GET /customers`.
pub const CUSTOMER_PAGE_SIZE: i64 = 10;

/// A resolved page request: a 1-based page number and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Build a page request, defaulting a missing page to 1 and clamping
    /// anything below 1 up to 1.
    pub fn new(page: Option<i64>, page_size: i64) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Rows per page, used as the SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// `(page - 1) * page_size`, used as the SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Total number of pages needed to hold `total` rows.
    pub fn total_pages(&self, total: i64) -> i64 {
        total_pages(total, self.page_size)
    }
}

/// `ceil(total / page_size)`; zero when there are no rows.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}
