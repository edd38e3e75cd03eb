//! Parser for the protected quotes document.
//!
//! The document is JSON of the shape served by the protected data route:
//!
//! ```json
//! {
//!   "quotes": [ { "id": 1, "author": "...", "quote": "...", ... } ],
//!   "metadata": { "categories": [...], "eras": [...], "nationalities": [...] }
//! }
//! ```
//!
//! `metadata` is optional; when absent it is derived from the records.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogMetadata, Quote, QuoteCatalog};
use std::fs;
use std::path::Path;

/// Wire shape of the quotes document
#[derive(serde::Deserialize)]
struct QuotesDocument {
    quotes: Vec<Quote>,
    #[serde(default)]
    metadata: Option<CatalogMetadata>,
}

/// Parse a quotes document from a JSON string and build the catalog.
pub fn parse_str(content: &str) -> Result<QuoteCatalog> {
    let document: QuotesDocument = serde_json::from_str(content)?;
    QuoteCatalog::from_quotes(document.quotes, document.metadata)
}

/// Load a quotes document from a file on disk.
///
/// A missing file is reported as `FileNotFound` with the path; other I/O
/// failures surface as `IoError`.
pub fn load_from_file(path: &Path) -> Result<QuoteCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            CatalogError::IoError(e)
        }
    })?;

    parse_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "quotes": [
            {
                "id": 1,
                "author": "Confucius",
                "quote": "Is it not a joy to learn and to practice what is learned?",
                "category": "Learning",
                "era": "Ancient",
                "nationality": "Chinese"
            },
            {
                "id": 2,
                "author": "Socrates",
                "quote": "Know thyself.",
                "category": "Wisdom",
                "era": "Ancient",
                "nationality": "Greek"
            }
        ],
        "metadata": {
            "categories": ["Learning", "Wisdom"],
            "eras": ["Ancient"],
            "nationalities": ["Chinese", "Greek"],
            "description": "A small curated set"
        }
    }"#;

    #[test]
    fn test_parse_document_with_metadata() {
        let catalog = parse_str(SAMPLE).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().author, "Confucius");
        assert_eq!(catalog.metadata().categories, vec!["Learning", "Wisdom"]);
        assert_eq!(
            catalog.metadata().description.as_deref(),
            Some("A small curated set")
        );
    }

    #[test]
    fn test_parse_document_without_metadata_derives_it() {
        let content = r#"{
            "quotes": [
                {
                    "id": 1,
                    "author": "Laozi",
                    "quote": "A journey of a thousand miles begins with a single step.",
                    "category": "Action",
                    "era": "Ancient",
                    "nationality": "Chinese"
                }
            ]
        }"#;

        let catalog = parse_str(content).unwrap();
        assert_eq!(catalog.metadata().categories, vec!["Action"]);
        assert_eq!(catalog.metadata().nationalities, vec!["Chinese"]);
        assert!(catalog.metadata().description.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_str("{ not json");
        assert!(matches!(result, Err(CatalogError::InvalidDocument(_))));
    }

    #[test]
    fn test_parse_rejects_missing_record_field() {
        // record without an author
        let content = r#"{
            "quotes": [
                { "id": 1, "quote": "orphaned", "category": "X", "era": "Y", "nationality": "Z" }
            ]
        }"#;

        let result = parse_str(content);
        assert!(matches!(result, Err(CatalogError::InvalidDocument(_))));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let result = load_from_file(Path::new("no/such/quotes.json"));
        match result {
            Err(CatalogError::FileNotFound { path }) => {
                assert!(path.contains("quotes.json"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
