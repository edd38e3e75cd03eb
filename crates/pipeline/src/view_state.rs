//! View state and its reducer-style transitions.
//!
//! The UI holds a single immutable ViewState (filter spec + page) that is
//! replaced, never mutated, through two pure transitions:
//!
//! - `apply_filter_change` — any edit of the filter criteria resets the
//!   page to 1
//! - `apply_page_change` — page navigation, clamped into the valid range
//!
//! `render` turns the state plus the loaded record set into the page of
//! cards to draw, re-clamping the page against the fresh page count on
//! every render so a shrinking result set can never leave the view on a
//! page that no longer exists.

use crate::filter_pipeline::filter_quotes;
use crate::pagination::{DEFAULT_WINDOW, page_count, page_slice, visible_page_window};
use crate::spec::FilterSpec;
use catalog::Quote;
use std::num::NonZeroUsize;

/// Cards shown per page, constant for a session
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// The user-driven state of the card wall: what is filtered and which
/// page is shown. Records themselves live in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub spec: FilterSpec,
    /// Current page, 1-indexed
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl ViewState {
    /// Initial state at UI mount: no filters, first page.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            spec: FilterSpec::default(),
            page: 1,
            page_size,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// An edit of one filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Query(String),
    /// `None` selects the "all" sentinel on the axis
    Category(Option<String>),
    Era(Option<String>),
    Nationality(Option<String>),
    /// The one-click "clear filters" action of the empty-result state
    ClearAll,
}

/// A page navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Goto(usize),
    Next,
    Prev,
}

/// Apply a filter edit, producing the next state.
///
/// Every filter edit resets the page to 1; this coupling is the explicit
/// contract here rather than an implicit ordering of UI side effects.
pub fn apply_filter_change(state: &ViewState, change: FilterChange) -> ViewState {
    let mut spec = state.spec.clone();

    match change {
        FilterChange::Query(query) => spec.query = query,
        FilterChange::Category(category) => spec.category = category,
        FilterChange::Era(era) => spec.era = era,
        FilterChange::Nationality(nationality) => spec.nationality = nationality,
        FilterChange::ClearAll => spec = FilterSpec::default(),
    }

    ViewState {
        spec,
        page: 1,
        page_size: state.page_size,
    }
}

/// Apply a page navigation event, producing the next state.
///
/// The target page is clamped into `[1, total_pages]`: Prev on the first
/// page and Next on the last page are no-ops.
pub fn apply_page_change(state: &ViewState, change: PageChange, total_pages: usize) -> ViewState {
    let total_pages = total_pages.max(1);

    let page = match change {
        PageChange::Goto(page) => page.clamp(1, total_pages),
        PageChange::Next => state.page.saturating_add(1).min(total_pages),
        PageChange::Prev => state.page.saturating_sub(1).max(1),
    };

    ViewState {
        spec: state.spec.clone(),
        page,
        page_size: state.page_size,
    }
}

/// Everything the presentation layer needs to draw one page of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// The cards on the current page, in record order
    pub quotes: Vec<&'a Quote>,
    /// Current page after clamping
    pub page: usize,
    pub total_pages: usize,
    /// Matching records across all pages; zero is a valid empty state
    pub total_matching: usize,
    /// Page numbers to render as navigation controls
    pub window: Vec<usize>,
}

impl PageView<'_> {
    /// True when the active filters match nothing — rendered as the
    /// empty-state message with a clear-filters action, never an error.
    pub fn is_empty_result(&self) -> bool {
        self.total_matching == 0
    }
}

/// Render the current page from the full record set and the view state.
///
/// Filters, clamps the page against the resulting page count, slices and
/// computes the navigation window. The stored state is left untouched;
/// clamping on every render keeps the view valid even when the record
/// set shrinks without a filter edit.
pub fn render<'a>(quotes: &'a [Quote], state: &ViewState) -> PageView<'a> {
    let matching = filter_quotes(quotes, &state.spec);
    let total_pages = page_count(matching.len(), state.page_size);
    let page = state.page.clamp(1, total_pages);

    PageView {
        quotes: page_slice(&matching, page, state.page_size).to_vec(),
        page,
        total_pages,
        total_matching: matching.len(),
        window: visible_page_window(page, total_pages, DEFAULT_WINDOW),
    }
}
