//! Filter to keep only records in a selected category.

use crate::traits::QuoteFilter;
use catalog::Quote;

/// Keeps records whose category equals the selected value exactly.
///
/// Matching is case-sensitive equality, not substring: selecting
/// "Art" must not keep "Martial Arts".
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl QuoteFilter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply<'a>(&self, quotes: Vec<&'a Quote>) -> Vec<&'a Quote> {
        quotes
            .into_iter()
            .filter(|quote| quote.category == self.category)
            .collect()
    }
}
