//! Paged menu navigation.
//!
//! The first page holds fewer items than the rest because it also shows the
//! control instructions. Selection and page are navigated independently: the
//! selected item does not have to be on the page being shown.

use std::ops::Range;

/// Page capacities for a paged list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub total_items: usize,
    pub first_page: usize,
    pub per_page: usize,
}

impl Paginator {
    pub fn new(total_items: usize, first_page: usize, per_page: usize) -> Self {
        Self {
            total_items,
            first_page,
            per_page: per_page.max(1),
        }
    }

    /// `ceil((total_items + first_page) / per_page)`
    pub fn total_pages(&self) -> usize {
        (self.total_items + self.first_page).div_ceil(self.per_page)
    }

    /// Half-open index range of the items visible on `page`
    pub fn page_range(&self, page: usize) -> Range<usize> {
        if page == 0 {
            return 0..self.total_items.min(self.first_page);
        }

        let start = self.first_page + self.per_page * (page - 1);
        let end = self.total_items.min(start + self.per_page);
        start.min(end)..end
    }
}

/// Current selection and page of a paged menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackCursor {
    pub item_index: usize,
    pub page_index: usize,
    paginator: Paginator,
}

impl PlaybackCursor {
    pub fn new(paginator: Paginator) -> Self {
        Self {
            item_index: 0,
            page_index: 0,
            paginator,
        }
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.paginator.page_range(self.page_index)
    }

    pub fn next_item(&mut self) {
        self.item_index = step(self.item_index, 1, self.paginator.total_items);
    }

    pub fn previous_item(&mut self) {
        self.item_index = step(self.item_index, -1, self.paginator.total_items);
    }

    pub fn next_page(&mut self) {
        self.page_index = step(self.page_index, 1, self.total_pages());
    }

    pub fn previous_page(&mut self) {
        self.page_index = step(self.page_index, -1, self.total_pages());
    }
}

/// Move `index` by `delta` with wraparound in `[0, count)`
fn step(index: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(count as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ranges() {
        let paginator = Paginator::new(9, 3, 6);
        assert_eq!(paginator.total_pages(), 2);
        assert_eq!(paginator.page_range(0), 0..3);
        assert_eq!(paginator.page_range(1), 3..9);
    }

    #[test]
    fn test_six_songs_fit_on_two_pages() {
        let paginator = Paginator::new(6, 3, 6);
        assert_eq!(paginator.total_pages(), 2);
        assert_eq!(paginator.page_range(0), 0..3);
        assert_eq!(paginator.page_range(1), 3..6);
    }

    #[test]
    fn test_short_list_fits_first_page() {
        let paginator = Paginator::new(2, 3, 6);
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.page_range(0), 0..2);
    }

    #[test]
    fn test_partial_last_page() {
        let paginator = Paginator::new(20, 3, 6);
        assert_eq!(paginator.total_pages(), 4);
        assert_eq!(paginator.page_range(2), 9..15);
        assert_eq!(paginator.page_range(3), 15..20);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let paginator = Paginator::new(9, 3, 6);
        assert!(paginator.page_range(5).is_empty());
    }

    #[test]
    fn test_item_navigation_wraps() {
        let mut cursor = PlaybackCursor::new(Paginator::new(6, 3, 6));
        cursor.previous_item();
        assert_eq!(cursor.item_index, 5);
        cursor.next_item();
        assert_eq!(cursor.item_index, 0);
        cursor.next_item();
        assert_eq!(cursor.item_index, 1);
    }

    #[test]
    fn test_page_navigation_wraps() {
        let mut cursor = PlaybackCursor::new(Paginator::new(6, 3, 6));
        cursor.previous_page();
        assert_eq!(cursor.page_index, 1);
        assert_eq!(cursor.visible_range(), 3..6);
        cursor.next_page();
        assert_eq!(cursor.page_index, 0);
    }

    #[test]
    fn test_selection_independent_of_page() {
        let mut cursor = PlaybackCursor::new(Paginator::new(9, 3, 6));
        for _ in 0..5 {
            cursor.next_item();
        }
        assert_eq!(cursor.item_index, 5);
        assert_eq!(cursor.page_index, 0);
        assert!(!cursor.visible_range().contains(&cursor.item_index));
    }

    #[test]
    fn test_empty_list() {
        let mut cursor = PlaybackCursor::new(Paginator::new(0, 3, 6));
        cursor.next_item();
        assert_eq!(cursor.item_index, 0);
        assert_eq!(cursor.total_pages(), 1);
        assert_eq!(cursor.visible_range(), 0..0);
    }
}
