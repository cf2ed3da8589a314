//! Generic offset pagination, independent of any particular record type.

use serde::Serialize;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Upper bound on the page size.
pub const MAX_LIMIT: u32 = 100;

/// Which slice of a result set to return. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  pub page:  u32,
  pub limit: u32,
}

impl Default for Pagination {
  fn default() -> Self { Self { page: 1, limit: DEFAULT_LIMIT } }
}

impl Pagination {
  /// Build from optional query parameters, clamping out-of-range values.
  pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
    Self {
      page:  page.unwrap_or(1).max(1),
      limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
    }
  }

  /// Number of records to skip.
  pub fn offset(&self) -> u64 {
    u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
  }
}

/// One page of results plus enough bookkeeping to fetch the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
  pub results:       Vec<T>,
  pub page:          u32,
  pub limit:         u32,
  pub total_pages:   u64,
  pub total_results: u64,
}

impl<T> Page<T> {
  pub fn new(results: Vec<T>, pagination: Pagination, total_results: u64) -> Self {
    Self {
      results,
      page: pagination.page,
      limit: pagination.limit,
      total_pages: total_results.div_ceil(u64::from(pagination.limit)),
      total_results,
    }
  }

  /// Transform every result, keeping the bookkeeping.
  pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
    Page {
      results:       self.results.into_iter().map(f).collect(),
      page:          self.page,
      limit:         self.limit,
      total_pages:   self.total_pages,
      total_results: self.total_results,
    }
  }
}
