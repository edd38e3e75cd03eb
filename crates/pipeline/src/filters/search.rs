//! Free-text search filter.
//!
//! Keeps records whose quote text, author, category or nationality
//! contains the query as a case-insensitive substring. The era axis is
//! not searched; it is only filterable exactly.

use crate::traits::QuoteFilter;
use catalog::Quote;

/// Case-insensitive substring search over the textual fields of a record.
///
/// Matching is plain Unicode substring containment: no diacritic
/// normalization, no tokenization, no relevance ranking. The first
/// matching field wins inclusion and record order is never changed.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Create a new SearchFilter.
    ///
    /// # Arguments
    /// * `query` - The raw query text; trimmed and lowercased here, so a
    ///   whitespace-only query yields a filter that keeps everything
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            needle: query.as_ref().trim().to_lowercase(),
        }
    }

    fn matches(&self, quote: &Quote) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        quote.quote.to_lowercase().contains(&self.needle)
            || quote.author.to_lowercase().contains(&self.needle)
            || quote.category.to_lowercase().contains(&self.needle)
            || quote.nationality.to_lowercase().contains(&self.needle)
    }
}

impl QuoteFilter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply<'a>(&self, quotes: Vec<&'a Quote>) -> Vec<&'a Quote> {
        quotes
            .into_iter()
            .filter(|quote| self.matches(quote))
            .collect()
    }
}
