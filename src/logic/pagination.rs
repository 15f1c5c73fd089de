//! Pagination logic
//!
//! Pure functions for slicing a filtered view into fixed-size pages.
//! Pages are 1-based. `paginate` never clamps the requested page; only the
//! previous/next transitions clamp.

use std::ops::Range;

use super::search::FilteredView;
use crate::catalog::EmojiRecord;

/// Number of emoji shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// One page of a filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a> {
    /// Records on this page (empty when `page` is past the end)
    pub items: Vec<&'a EmojiRecord>,
    /// Requested page, 1-based
    pub page: usize,
    /// `ceil(total_items / page_size)`, 0 for an empty view
    pub total_pages: usize,
    /// Length of the whole filtered view
    pub total_items: usize,
    /// Whether previous/next controls should be shown at all
    pub show_controls: bool,
}

impl PageSlice<'_> {
    /// Page count for display: an empty view still reads "Page 1 of 1"
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Total number of pages for `len` items
///
/// # Examples
/// ```
/// use emojifav::logic::pagination::total_pages;
///
/// assert_eq!(total_pages(65, 30), 3);
/// assert_eq!(total_pages(60, 30), 2);
/// assert_eq!(total_pages(0, 30), 0);
/// ```
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Index range covered by `page`, clipped to `len`
///
/// Pages past the end (and page 0) produce an empty range.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Previous/next controls are hidden when everything fits on one page
pub fn controls_visible(len: usize, page_size: usize) -> bool {
    len > page_size
}

/// Page after `page`, never beyond the last page (and never below 1)
pub fn next_page(page: usize, total_pages: usize) -> usize {
    (page + 1).min(total_pages.max(1))
}

/// Page before `page`, never below 1
pub fn previous_page(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}

/// Slice `view` to the requested page
pub fn paginate<'a>(view: &FilteredView<'a>, page: usize, page_size: usize) -> PageSlice<'a> {
    let len = view.len();
    PageSlice {
        items: view.slice(page_range(len, page, page_size)),
        page,
        total_pages: total_pages(len, page_size),
        total_items: len,
        show_controls: controls_visible(len, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::search::filter;

    fn numbered(count: usize) -> Vec<EmojiRecord> {
        (0..count)
            .map(|i| EmojiRecord::new(format!("#{i}"), format!("emoji {i}"), &[]))
            .collect()
    }

    #[test]
    fn test_last_partial_page() {
        let catalog = numbered(65);
        let view = filter(&catalog, "");
        let slice = paginate(&view, 3, 30);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.items.len(), 5);
        assert_eq!(slice.items[0].symbol, "#60");
        assert_eq!(slice.items[4].symbol, "#64");
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let catalog = numbered(65);
        let view = filter(&catalog, "");
        let slice = paginate(&view, 4, 30);
        assert!(slice.items.is_empty());
        assert_eq!(slice.page, 4);
        assert_eq!(slice.total_pages, 3);
    }

    #[test]
    fn test_pages_reconstruct_view() {
        for count in [0, 1, 29, 30, 31, 65, 90] {
            let catalog = numbered(count);
            let view = filter(&catalog, "");
            let pages = total_pages(view.len(), 30);
            let joined: Vec<&EmojiRecord> = (1..=pages)
                .flat_map(|page| paginate(&view, page, 30).items)
                .collect();
            let expected: Vec<&EmojiRecord> = view.iter().collect();
            assert_eq!(joined, expected, "count {count}");
        }
    }

    #[test]
    fn test_empty_view() {
        let catalog = numbered(0);
        let view = filter(&catalog, "");
        let slice = paginate(&view, 1, 30);
        assert_eq!(slice.total_pages, 0);
        assert_eq!(slice.display_total_pages(), 1);
        assert!(!slice.show_controls);
        assert!(!slice.has_next());
    }

    #[test]
    fn test_controls_hidden_when_everything_fits() {
        assert!(!controls_visible(30, 30));
        assert!(controls_visible(31, 30));
        assert!(!controls_visible(0, 30));
    }

    #[test]
    fn test_next_page_clamps_to_last() {
        assert_eq!(next_page(1, 3), 2);
        assert_eq!(next_page(3, 3), 3);
        assert_eq!(next_page(1, 0), 1);
    }

    #[test]
    fn test_previous_page_clamps_to_first() {
        assert_eq!(previous_page(3), 2);
        assert_eq!(previous_page(1), 1);
    }

    #[test]
    fn test_page_zero_is_empty() {
        assert_eq!(page_range(10, 0, 5), 0..0);
    }

    #[test]
    fn test_has_previous_and_next() {
        let catalog = numbered(65);
        let view = filter(&catalog, "");
        let middle = paginate(&view, 2, 30);
        assert!(middle.has_previous());
        assert!(middle.has_next());
        let first = paginate(&view, 1, 30);
        assert!(!first.has_previous());
    }
}
