//! # Catalog Crate
//!
//! This crate handles loading and indexing the quote catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Quote, CatalogMetadata, QuoteCatalog)
//! - **parser**: Parse the quotes JSON document into the catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::parser;
//! use std::path::Path;
//!
//! // Load the full record set once per session
//! let catalog = parser::load_from_file(Path::new("data/quotes.json"))?;
//!
//! // Query data
//! let quote = catalog.get(1).unwrap();
//! println!("{} — {}", quote.quote, quote.author);
//! println!("categories: {:?}", catalog.metadata().categories);
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{CatalogMetadata, Quote, QuoteCatalog, QuoteId};
