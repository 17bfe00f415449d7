//! Page/limit pagination contract shared by the API and the client.
//!
//! Pages are 1-based and map to row offsets as `(page - 1) * limit`.
//! Out-of-range values are clamped rather than rejected: `page` floors at 1
//! and `limit` stays within `1..=MAX_PAGE_SIZE`. Values that fail to parse
//! fall back to the defaults.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// First page number. Pages are 1-based.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of contacts per page.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Maximum number of contacts per page.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------

/// Clamp a user-provided page number to valid bounds.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_page_size(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Page requests
// ---------------------------------------------------------------------------

/// A resolved pagination request: a 1-based page and a page size, both
/// already clamped to valid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a request from optional page/limit values, clamping both.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            limit: clamp_page_size(limit),
        }
    }

    /// Build a request from raw query-string values.
    ///
    /// Values that are missing or fail to parse as integers fall back to
    /// the defaults.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.and_then(|s| s.trim().parse().ok()),
            limit.and_then(|s| s.trim().parse().ok()),
        )
    }

    /// Zero-based row offset for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ---------------------------------------------------------------------------
// Pager math
// ---------------------------------------------------------------------------

/// Number of pages needed to show `total` rows at `limit` rows per page.
///
/// Zero rows means zero pages. `limit` is assumed positive (clamped
/// upstream).
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

/// Whether a previous page exists from `page`.
pub fn has_prev(page: i64) -> bool {
    page > 1
}

/// Whether a next page exists from `page` given `total_pages`.
pub fn has_next(page: i64, total_pages: i64) -> bool {
    total_pages > 0 && page < total_pages
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
