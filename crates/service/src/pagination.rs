//! Pagination utilities for service layer
//!
//! `Pagination` is the requested window, `Paging` is what goes back to the client.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub size: u64,
}

impl Pagination {
    /// Clamp to sane bounds and return `(0-based page index, page size)`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let size = self.size.clamp(1, MAX_PAGE_SIZE);
        (page - 1, size)
    }

    /// Paging metadata for a result set of `total_items` rows.
    pub fn paging(self, total_items: u64) -> Paging {
        let (page_idx, size) = self.normalize();
        Paging {
            size,
            total_page: total_items.div_ceil(size),
            current_page: page_idx + 1,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, size: DEFAULT_PAGE_SIZE } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub size: u64,
    pub total_page: u64,
    pub current_page: u64,
}

/// One window of results together with its paging metadata.
#[derive(Clone, Debug)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}
