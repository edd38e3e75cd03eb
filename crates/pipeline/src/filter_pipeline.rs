//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, plus the
//! `filter_quotes` entry point that assembles a pipeline from a
//! FilterSpec.

use crate::filters::{CategoryFilter, EraFilter, NationalityFilter, SearchFilter};
use crate::spec::FilterSpec;
use crate::traits::QuoteFilter;
use catalog::Quote;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter::new("imagination"))
///     .add_filter(CategoryFilter::new("Wisdom"));
///
/// let kept = pipeline.apply(catalog.quotes().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn QuoteFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl QuoteFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Assemble a pipeline from the active clauses of a FilterSpec.
    ///
    /// Inactive axes (the `None` sentinel) and a blank query contribute no
    /// filter stage at all, so the all-sentinel spec produces an empty
    /// pipeline — the identity filter.
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let mut pipeline = Self::new();

        if let Some(query) = spec.normalized_query() {
            pipeline = pipeline.add_filter(SearchFilter::new(query));
        }
        if let Some(category) = &spec.category {
            pipeline = pipeline.add_filter(CategoryFilter::new(category.clone()));
        }
        if let Some(era) = &spec.era {
            pipeline = pipeline.add_filter(EraFilter::new(era.clone()));
        }
        if let Some(nationality) = &spec.nationality {
            pipeline = pipeline.add_filter(NationalityFilter::new(nationality.clone()));
        }

        pipeline
    }

    /// Apply all filters in sequence to the records.
    ///
    /// A record survives iff every filter keeps it, so the result is the
    /// conjunction of all predicates. Relative order is preserved
    /// throughout.
    pub fn apply<'a>(&self, quotes: Vec<&'a Quote>) -> Vec<&'a Quote> {
        let mut current = quotes;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter a record set by a FilterSpec.
///
/// This is the single entry point the view layer uses: a record is kept
/// iff it satisfies ALL active clauses of the spec. The output preserves
/// the relative order of `quotes`, never duplicates or synthesizes
/// records, and may be empty.
pub fn filter_quotes<'a>(quotes: &'a [Quote], spec: &FilterSpec) -> Vec<&'a Quote> {
    FilterPipeline::from_spec(spec).apply(quotes.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SearchFilter;

    fn quote(id: u32, author: &str, text: &str, category: &str, era: &str, nationality: &str) -> Quote {
        Quote {
            id,
            author: author.to_string(),
            quote: text.to_string(),
            category: category.to_string(),
            era: era.to_string(),
            nationality: nationality.to_string(),
        }
    }

    fn sample_records() -> Vec<Quote> {
        vec![
            quote(1, "Confucius", "Is it not a joy to learn?", "Learning", "Ancient", "Chinese"),
            quote(2, "Socrates", "Know thyself.", "Wisdom", "Ancient", "Greek"),
            quote(3, "Einstein", "Imagination is more important than knowledge.", "Wisdom", "Modern", "German"),
            quote(4, "Laozi", "A journey of a thousand miles begins with a single step.", "Action", "Ancient", "Chinese"),
            quote(5, "Shakespeare", "To be, or not to be.", "Philosophy", "Early Modern", "English"),
        ]
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let records = sample_records();
        let pipeline = FilterPipeline::new();

        let kept = pipeline.apply(records.iter().collect());
        assert_eq!(kept.len(), records.len());
    }

    #[test]
    fn test_single_filter() {
        let records = sample_records();
        let pipeline = FilterPipeline::new().add_filter(SearchFilter::new("know"));

        let kept = pipeline.apply(records.iter().collect());

        // "Know thyself." and "...than knowledge."
        let ids: Vec<u32> = kept.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_from_spec_with_all_sentinels_is_identity() {
        let records = sample_records();
        let spec = FilterSpec::default();

        let kept = filter_quotes(&records, &spec);

        let ids: Vec<u32> = kept.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clauses_combine_as_conjunction() {
        let records = sample_records();
        let spec = FilterSpec {
            query: "o".to_string(), // matches every record somewhere
            era: Some("Ancient".to_string()),
            nationality: Some("Chinese".to_string()),
            ..FilterSpec::default()
        };

        let kept = filter_quotes(&records, &spec);

        let ids: Vec<u32> = kept.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_order_preserved_and_no_duplicates() {
        let records = sample_records();
        let spec = FilterSpec {
            era: Some("Ancient".to_string()),
            ..FilterSpec::default()
        };

        let kept = filter_quotes(&records, &spec);

        let ids: Vec<u32> = kept.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_category_scenario_four_of_ten() {
        // 10 records: category A gets 4, category B gets 6
        let records: Vec<Quote> = (1..=10)
            .map(|id| {
                let category = if id <= 4 { "A" } else { "B" };
                quote(id, "Author", "Some text.", category, "Modern", "French")
            })
            .collect();

        let spec = FilterSpec {
            category: Some("A".to_string()),
            ..FilterSpec::default()
        };

        let kept = filter_quotes(&records, &spec);

        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|q| q.category == "A"));
        let ids: Vec<u32> = kept.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_match_query_is_empty_not_error() {
        let records = sample_records();
        let spec = FilterSpec {
            query: "no such text anywhere".to_string(),
            ..FilterSpec::default()
        };

        let kept = filter_quotes(&records, &spec);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_is_deterministic() {
        let records = sample_records();
        let spec = FilterSpec {
            query: "the".to_string(),
            ..FilterSpec::default()
        };

        let first: Vec<u32> = filter_quotes(&records, &spec).iter().map(|q| q.id).collect();
        let second: Vec<u32> = filter_quotes(&records, &spec).iter().map(|q| q.id).collect();
        assert_eq!(first, second);
    }
}
