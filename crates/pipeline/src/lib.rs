//! Pipeline for filtering and paginating the quote catalog.
//!
//! This crate provides:
//! - QuoteFilter trait and implementations for record filtering
//! - FilterPipeline for composing filters from a FilterSpec
//! - Pagination math (page count, page slice, visible page window)
//! - ViewState and its reducer-style transitions
//!
//! ## Architecture
//! The pipeline processes the loaded record set in stages:
//! 1. Filters keep the records matching every active criterion
//! 2. Pagination slices the filtered set into the current page
//! 3. The page-number window is derived for the navigation controls
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterChange, ViewState, apply_filter_change, render};
//!
//! let state = ViewState::default();
//! let state = apply_filter_change(&state, FilterChange::Query("wisdom".into()));
//!
//! let view = render(catalog.quotes(), &state);
//! println!("page {} of {}", view.page, view.total_pages);
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod spec;
pub mod traits;
pub mod view_state;

// Re-export main types
pub use filter_pipeline::{FilterPipeline, filter_quotes};
pub use pagination::{DEFAULT_WINDOW, page_count, page_slice, visible_page_window};
pub use spec::FilterSpec;
pub use traits::QuoteFilter;
pub use view_state::{
    DEFAULT_PAGE_SIZE, FilterChange, PageChange, PageView, ViewState, apply_filter_change,
    apply_page_change, render,
};
