//! Incremental prefix pagination.
//!
//! The catalog never skips pages: "page 3" means pages 1 through 3
//! concatenated, and the "load more" button simply extends the prefix.

use serde::Serialize;

/// Page size used by the catalog grid.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// The currently visible prefix of an ordered collection.
#[derive(Debug, Serialize, Clone)]
pub struct Window<T> {
    /// Items of pages 1 through `current_page`.
    pub visible: Vec<T>,
    /// Whether the ordered collection extends past the visible prefix.
    pub has_more: bool,
}

/// Cut the visible prefix out of `ordered`. A page of 0 is treated as
/// page 1 so the window is never empty while items exist.
pub fn windowed_view<T: Clone>(ordered: &[T], current_page: usize, per_page: usize) -> Window<T> {
    let end = current_page.max(1).saturating_mul(per_page).min(ordered.len());
    Window {
        visible: ordered[..end].to_vec(),
        has_more: end < ordered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_a_prefix() {
        let items: Vec<u32> = (0..30).collect();
        let window = windowed_view(&items, 2, 12);
        assert_eq!(window.visible, (0..24).collect::<Vec<_>>());
        assert!(window.has_more);
    }

    #[test]
    fn growing_the_page_never_shrinks_the_window() {
        let items: Vec<u32> = (0..30).collect();
        let mut previous = 0;
        for page in 1..=5 {
            let window = windowed_view(&items, page, 12);
            assert!(window.visible.len() >= previous);
            previous = window.visible.len();
        }
    }

    #[test]
    fn has_more_is_false_exactly_when_everything_is_visible() {
        let items: Vec<u32> = (0..25).collect();
        for page in 1..=4 {
            let window = windowed_view(&items, page, 12);
            assert_eq!(window.has_more, window.visible.len() < items.len());
        }
        let full = windowed_view(&items, 3, 12);
        assert!(!full.has_more);
        assert_eq!(full.visible.len(), 25);
    }

    #[test]
    fn page_zero_behaves_like_page_one() {
        let items: Vec<u32> = (0..5).collect();
        let window = windowed_view(&items, 0, 3);
        assert_eq!(window.visible.len(), 3);
        assert!(window.has_more);
    }

    #[test]
    fn empty_collection_yields_an_empty_window() {
        let window = windowed_view::<u32>(&[], 1, 12);
        assert!(window.visible.is_empty());
        assert!(!window.has_more);
    }
}
