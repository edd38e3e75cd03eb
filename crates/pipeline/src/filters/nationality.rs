//! Filter to keep only records of a selected nationality.

use crate::traits::QuoteFilter;
use catalog::Quote;

/// Keeps records whose nationality equals the selected value exactly.
pub struct NationalityFilter {
    nationality: String,
}

impl NationalityFilter {
    pub fn new(nationality: impl Into<String>) -> Self {
        Self {
            nationality: nationality.into(),
        }
    }
}

impl QuoteFilter for NationalityFilter {
    fn name(&self) -> &str {
        "NationalityFilter"
    }

    fn apply<'a>(&self, quotes: Vec<&'a Quote>) -> Vec<&'a Quote> {
        quotes
            .into_iter()
            .filter(|quote| quote.nationality == self.nationality)
            .collect()
    }
}
