//! Pagination math for the card grid.
//!
//! Three pure functions: page count, page slicing, and the sliding window
//! of page numbers rendered as navigation controls. Page numbers are
//! 1-indexed; the page size is a `NonZeroUsize` so a zero size is
//! unrepresentable. Invalid pages from callers are contract violations,
//! not runtime conditions: they fail a `debug_assert!` in development and
//! degrade to an empty/clamped result in release builds.

use std::num::NonZeroUsize;

/// Number of page buttons rendered around the current page
pub const DEFAULT_WINDOW: usize = 5;

/// Number of pages needed to show `total_items` at `page_size` per page.
///
/// `ceil(total_items / page_size)` with a floor of 1: an empty list still
/// reports a single (empty) page.
pub fn page_count(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// The sub-slice of `items` shown on `page` (1-indexed).
///
/// Returns at most `page_size` items starting at offset
/// `(page - 1) * page_size`. A page beyond the valid range yields an
/// empty slice; callers wanting a non-empty result must clamp first.
pub fn page_slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    debug_assert!(page >= 1, "pages are 1-indexed");
    if page == 0 {
        return &[];
    }

    let size = page_size.get();
    let start = (page - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }

    let end = (start + size).min(items.len());
    &items[start..end]
}

/// The page numbers to render as clickable controls.
///
/// With `total_pages` at most `window_size`, every page is listed.
/// Otherwise the window is centered on `current_page` where possible and
/// pushed flush against either boundary near the ends, so exactly
/// `window_size` contiguous entries are returned.
pub fn visible_page_window(
    current_page: usize,
    total_pages: usize,
    window_size: usize,
) -> Vec<usize> {
    debug_assert!(total_pages >= 1, "page_count never reports zero pages");
    debug_assert!(window_size >= 1 && window_size % 2 == 1, "window must be positive and odd");

    let total_pages = total_pages.max(1);
    let window_size = window_size.max(1);
    let current_page = current_page.clamp(1, total_pages);

    if total_pages <= window_size {
        return (1..=total_pages).collect();
    }

    let mut start = current_page.saturating_sub(window_size / 2).max(1);
    let end = (start + window_size - 1).min(total_pages);
    if end - start + 1 < window_size {
        start = (end + 1).saturating_sub(window_size).max(1);
    }

    (start..=end).collect()
}
