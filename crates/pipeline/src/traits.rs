//! Core traits for the filtering pipeline.
//!
//! This module defines the QuoteFilter trait that allows composable,
//! extensible filters to be applied to the record set.

use catalog::Quote;

/// Core trait for filtering quote records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take and return borrowed records: the catalog owns the data,
///   a filter pass never clones or reorders it
pub trait QuoteFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// Keeps exactly the records satisfying this filter's predicate, in
    /// their original relative order. Filtering cannot fail: an empty
    /// result is a valid outcome, not an error.
    fn apply<'a>(&self, quotes: Vec<&'a Quote>) -> Vec<&'a Quote>;
}
