//! Filter to keep only records from a selected era.

use crate::traits::QuoteFilter;
use catalog::Quote;

/// Keeps records whose era equals the selected value exactly.
pub struct EraFilter {
    era: String,
}

impl EraFilter {
    pub fn new(era: impl Into<String>) -> Self {
        Self { era: era.into() }
    }
}

impl QuoteFilter for EraFilter {
    fn name(&self) -> &str {
        "EraFilter"
    }

    fn apply<'a>(&self, quotes: Vec<&'a Quote>) -> Vec<&'a Quote> {
        quotes
            .into_iter()
            .filter(|quote| quote.era == self.era)
            .collect()
    }
}
