//! Pagination constants and metadata

use serde::Serialize;

/// Fixed page size of the invoices table
pub const ITEMS_PER_PAGE: usize = 6;

/// Paginated response structure
///
/// Wraps one page of rows with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of pages (after filters)
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from the current page and total page count
    pub fn new(page: usize, limit: usize, total_pages: usize) -> Self {
        Self {
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Number of pages needed for `total_items` rows, ceiling division.
///
/// Zero rows is zero pages, not one.
pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(ITEMS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, ITEMS_PER_PAGE, 3);
        assert!(!meta.has_prev);
        assert!(meta.has_next);

        let meta = PaginationMeta::new(3, ITEMS_PER_PAGE, 3);
        assert!(meta.has_prev);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_pagination_meta_empty_set() {
        let meta = PaginationMeta::new(1, ITEMS_PER_PAGE, 0);
        assert!(!meta.has_prev);
        assert!(!meta.has_next);
    }
}
