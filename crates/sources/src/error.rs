//! Error types for record sources.

use catalog::CatalogError;
use thiserror::Error;

/// Why a fetch of the protected record set failed.
///
/// The two variants drive different UI states: `Unauthenticated` renders
/// the "please sign in" screen and is never retried automatically, while
/// `Catalog` renders the retryable error banner.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The session is not authenticated; protected data is unreachable
    #[error("Not authenticated, cannot access protected data")]
    Unauthenticated,

    /// The record document could not be read or parsed
    #[error("Failed to load quotes data: {0}")]
    Catalog(#[from] CatalogError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FetchError>;
