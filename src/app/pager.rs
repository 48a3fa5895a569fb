//! Page position against the totals reported by the last search

/// Tracks where we are in a paged result set. Pages are 1-based; a page
/// request outside `[1, total_pages]` is rejected so callers can treat it as
/// a silent no-op.
pub struct Pager {
    current_page: u32,
    total_pages: u32,
    total_elements: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_elements: 0,
        }
    }
}

impl Pager {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// Record the totals of a fetched page. `requested_page` is clamped so
    /// the current page never exceeds the reported bound.
    pub fn apply(&mut self, requested_page: u32, total_pages: u32, total_elements: u64) {
        self.total_pages = total_pages;
        self.total_elements = total_elements;
        self.current_page = requested_page.clamp(1, total_pages.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_three_pages() {
        let mut pager = Pager::default();
        pager.apply(1, 3, 17);
        assert!(!pager.can_go_prev());
        assert!(pager.can_go_next());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let mut pager = Pager::default();
        pager.apply(3, 3, 17);
        assert!(pager.can_go_prev());
        assert!(!pager.can_go_next());
    }

    #[test]
    fn test_out_of_range_pages_rejected() {
        let mut pager = Pager::default();
        pager.apply(1, 3, 17);
        assert!(!pager.accepts(0));
        assert!(!pager.accepts(5));
        assert!(pager.accepts(2));
        assert!(pager.accepts(3));
    }

    #[test]
    fn test_empty_result_set() {
        let mut pager = Pager::default();
        pager.apply(1, 0, 0);
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.can_go_prev());
        assert!(!pager.can_go_next());
        assert!(!pager.accepts(1));
    }

    #[test]
    fn test_requested_page_clamped_to_bound() {
        let mut pager = Pager::default();
        // Results shrank while we were on a later page
        pager.apply(4, 2, 9);
        assert_eq!(pager.current_page(), 2);
    }
}
