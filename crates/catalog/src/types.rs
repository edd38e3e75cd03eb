//! Core domain types for the quote catalog.
//!
//! This module defines the record type served by the protected data file
//! and the in-memory catalog that holds the full record set for a session.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a quote record
pub type QuoteId = u32;

/// A single quotation record.
///
/// Records are immutable after load: the catalog owns them and hands out
/// references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    pub quote: String,
    pub category: String,
    pub era: String,
    pub nationality: String,
}

/// Metadata describing the value sets present in the catalog.
///
/// The filter UI offers exactly these lists as selectable axes. A document
/// may ship its own metadata; when it does not, the lists are derived from
/// the records in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub categories: Vec<String>,
    pub eras: Vec<String>,
    pub nationalities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The in-memory quote catalog.
///
/// Holds all records in document order plus an id index for O(1) lookups.
/// Created once per session from the record source, read-only thereafter.
#[derive(Debug, Clone)]
pub struct QuoteCatalog {
    quotes: Vec<Quote>,
    id_index: HashMap<QuoteId, usize>,
    metadata: CatalogMetadata,
}

impl QuoteCatalog {
    /// Build a catalog from parsed records.
    ///
    /// Validates the record set:
    /// - ids must be unique
    /// - `author` and `quote` text must not be blank
    ///
    /// When `metadata` is `None`, the value lists are derived from the
    /// records themselves.
    pub fn from_quotes(
        quotes: Vec<Quote>,
        metadata: Option<CatalogMetadata>,
    ) -> Result<Self> {
        let mut id_index = HashMap::with_capacity(quotes.len());

        for (position, quote) in quotes.iter().enumerate() {
            if quote.author.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    id: quote.id,
                    field: "author",
                });
            }
            if quote.quote.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    id: quote.id,
                    field: "quote",
                });
            }
            if id_index.insert(quote.id, position).is_some() {
                return Err(CatalogError::DuplicateId { id: quote.id });
            }
        }

        let metadata = metadata.unwrap_or_else(|| derive_metadata(&quotes));

        Ok(Self {
            quotes,
            id_index,
            metadata,
        })
    }

    /// All records in document order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Look up a record by id
    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.id_index.get(&id).map(|&position| &self.quotes[position])
    }

    /// The value sets offered to the filter UI
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Get counts for debugging/validation: (quotes, categories, eras, nationalities)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.quotes.len(),
            self.metadata.categories.len(),
            self.metadata.eras.len(),
            self.metadata.nationalities.len(),
        )
    }
}

/// Derive metadata value lists from the records, deduplicated in
/// first-seen order.
fn derive_metadata(quotes: &[Quote]) -> CatalogMetadata {
    let mut metadata = CatalogMetadata::default();

    for quote in quotes {
        push_distinct(&mut metadata.categories, &quote.category);
        push_distinct(&mut metadata.eras, &quote.era);
        push_distinct(&mut metadata.nationalities, &quote.nationality);
    }

    metadata
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}
