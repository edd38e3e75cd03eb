//! # Quote Board Orchestrator
//!
//! This module coordinates the card wall lifecycle:
//! 1. Hold the session status supplied by the auth layer
//! 2. Fetch the full record set once from the record source
//! 3. Track the loading / failed / ready states of that fetch
//! 4. Route filter and page events through the view-state reducers
//! 5. Render the current page for the presentation layer
//!
//! The board owns all mutable state; every update happens atomically in
//! response to one event at a time, so no locking is needed.

use catalog::QuoteCatalog;
use pipeline::{
    FilterChange, PageChange, PageView, ViewState, apply_filter_change, apply_page_change,
    filter_quotes, page_count, render,
};
use sources::{FetchError, QuoteSource, SessionStatus};
use std::num::NonZeroUsize;
use tracing::{info, warn};

/// Lifecycle of the record set behind the card wall.
///
/// `Failed` is the retryable error banner. An unauthenticated session
/// never reaches `Failed`: the sign-in screen is rendered from the
/// session status before any fetch is attempted.
#[derive(Debug)]
pub enum BoardState {
    /// Nothing fetched yet
    Idle,
    /// Fetch in flight; show the loading indicator
    Loading,
    /// Fetch failed; show the error banner with a manual retry action
    Failed { message: String },
    /// Record set loaded; filtering and paging are available
    Ready {
        catalog: QuoteCatalog,
        view: ViewState,
    },
}

/// Main orchestrator composing session, record source and pipeline.
pub struct QuoteBoard<S> {
    source: S,
    session: SessionStatus,
    page_size: NonZeroUsize,
    state: BoardState,
}

impl<S: QuoteSource> QuoteBoard<S> {
    /// Create a board with the default page size.
    pub fn new(source: S, session: SessionStatus) -> Self {
        Self {
            source,
            session,
            page_size: pipeline::DEFAULT_PAGE_SIZE,
            state: BoardState::Idle,
        }
    }

    /// Override the cards-per-page for this session (builder pattern).
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn session(&self) -> &SessionStatus {
        &self.session
    }

    /// Replace the session status (sign-in, sign-out, refresh).
    ///
    /// Losing authentication drops any loaded records: protected data
    /// must not outlive the session it was fetched under.
    pub fn set_session(&mut self, session: SessionStatus) {
        self.session = session;
        if !self.session.is_authenticated() {
            self.state = BoardState::Idle;
        }
    }

    /// Fetch the full record set.
    ///
    /// There is no automatic retry: after a failure the caller invokes
    /// `load` again from the banner's retry action. Each call is a fresh
    /// fetch.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        self.state = BoardState::Loading;

        match self.source.fetch(&self.session).await {
            Ok(catalog) => {
                let (quotes, categories, eras, nationalities) = catalog.counts();
                info!(
                    "Loaded quote catalog: {} quotes, {} categories, {} eras, {} nationalities",
                    quotes, categories, eras, nationalities
                );
                self.state = BoardState::Ready {
                    catalog,
                    view: ViewState::new(self.page_size),
                };
                Ok(())
            }
            Err(FetchError::Unauthenticated) => {
                // Not a fetch failure: the sign-in screen is rendered
                // from the session status, so the board stays idle.
                warn!("Fetch refused: session is not authenticated");
                self.state = BoardState::Idle;
                Err(FetchError::Unauthenticated)
            }
            Err(e) => {
                warn!("Failed to load quote catalog: {}", e);
                self.state = BoardState::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Route a filter edit through the reducer.
    ///
    /// Resets the page to 1 per the view-state contract. Ignored unless
    /// the record set is loaded.
    pub fn handle_filter(&mut self, change: FilterChange) {
        if let BoardState::Ready { view, .. } = &mut self.state {
            *view = apply_filter_change(view, change);
        }
    }

    /// Route a page navigation event through the reducer.
    ///
    /// The target page is clamped against the page count of the current
    /// filtered set. Ignored unless the record set is loaded.
    pub fn handle_page(&mut self, change: PageChange) {
        if let BoardState::Ready { catalog, view } = &mut self.state {
            let matching = filter_quotes(catalog.quotes(), &view.spec);
            let total_pages = page_count(matching.len(), view.page_size);
            *view = apply_page_change(view, change, total_pages);
        }
    }

    /// The one-click reset offered by the empty-result state.
    pub fn clear_filters(&mut self) {
        self.handle_filter(FilterChange::ClearAll);
    }

    /// The loaded catalog, if any.
    pub fn catalog(&self) -> Option<&QuoteCatalog> {
        match &self.state {
            BoardState::Ready { catalog, .. } => Some(catalog),
            _ => None,
        }
    }

    /// Render the current page of cards.
    ///
    /// Returns `None` until the record set is loaded. The page is
    /// re-clamped on every render, so a stale page number can never
    /// produce an out-of-range view.
    pub fn page(&self) -> Option<PageView<'_>> {
        match &self.state {
            BoardState::Ready { catalog, view } => Some(render(catalog.quotes(), view)),
            _ => None,
        }
    }
}
