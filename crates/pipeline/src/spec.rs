//! User-driven filter criteria.
//!
//! A FilterSpec captures the live state of the filter controls: one
//! free-text query plus three exact-match axes. `None` on an axis is the
//! "all" sentinel — an explicit absent marker rather than a magic string,
//! so a dataset with a category literally named "all" cannot collide
//! with it.

/// Transient filter state owned by the UI layer.
///
/// The default spec matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Free-text query, matched case-insensitively against quote text,
    /// author, category and nationality
    pub query: String,
    /// Exact category to keep, or `None` for all
    pub category: Option<String>,
    /// Exact era to keep, or `None` for all
    pub era: Option<String>,
    /// Exact nationality to keep, or `None` for all
    pub nationality: Option<String>,
}

impl FilterSpec {
    /// True when no axis is active and the query is blank, i.e. the spec
    /// is the identity filter.
    pub fn is_unfiltered(&self) -> bool {
        self.normalized_query().is_none()
            && self.category.is_none()
            && self.era.is_none()
            && self.nationality.is_none()
    }

    /// The query trimmed and lowercased, or `None` when it is empty or
    /// whitespace-only (no text filter applied).
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}
