//! # Sources Crate
//!
//! This crate provides the record source for the quote catalog: the one
//! asynchronous operation in the system, gated on an authenticated
//! session.
//!
//! ## Components
//!
//! - **session**: Tri-state authentication status and the user profile
//! - **source**: The QuoteSource trait plus an in-memory source
//! - **file**: File-backed source reading the protected JSON document
//! - **error**: FetchError distinguishing auth failures from data failures
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{FileQuoteSource, QuoteSource, SessionStatus, UserProfile};
//!
//! let source = FileQuoteSource::new("data/quotes.json");
//! let session = SessionStatus::Authenticated(UserProfile::local());
//!
//! // The single suspension point: resolves with the whole record set
//! let catalog = source.fetch(&session).await?;
//! ```

// Public modules
pub mod error;
pub mod file;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use error::{FetchError, Result};
pub use file::FileQuoteSource;
pub use session::{SessionStatus, UserProfile};
pub use source::{QuoteSource, StaticQuoteSource};
