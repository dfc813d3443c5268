//! Page arithmetic for the thumbnail grid.

use std::ops::Range;

/// Splits `total` items into pages of `page_size`; pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    page_size: usize,
}

impl Pagination {
    /// A `page_size` of zero is treated as one.
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Clamp a requested page into `1..=page_count`.
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.page_count())
    }

    /// Item index range shown on `page` (after clamping).
    pub fn range(&self, page: usize) -> Range<usize> {
        let page = self.clamp(page);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total);
        start.min(self.total)..end
    }

    pub fn has_prev(&self, page: usize) -> bool {
        self.clamp(page) > 1
    }

    pub fn has_next(&self, page: usize) -> bool {
        self.clamp(page) < self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_one_empty_page() {
        let pages = Pagination::new(0, 12);
        assert_eq!(pages.page_count(), 1);
        assert_eq!(pages.range(1), 0..0);
        assert!(!pages.has_prev(1));
        assert!(!pages.has_next(1));
    }

    #[test]
    fn last_page_holds_remainder() {
        let pages = Pagination::new(25, 12);
        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.range(1), 0..12);
        assert_eq!(pages.range(2), 12..24);
        assert_eq!(pages.range(3), 24..25);
        assert!(pages.has_next(2));
        assert!(!pages.has_next(3));
        assert!(pages.has_prev(2));
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let pages = Pagination::new(24, 12);
        assert_eq!(pages.clamp(0), 1);
        assert_eq!(pages.clamp(9), 2);
        assert_eq!(pages.range(9), 12..24);
    }

    #[test]
    fn zero_page_size_means_one_per_page() {
        let pages = Pagination::new(3, 0);
        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.range(2), 1..2);
    }
}
