//! Integration tests for the file-backed record source.

use catalog::CatalogError;
use sources::{FetchError, FileQuoteSource, QuoteSource, SessionStatus, UserProfile};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/quotes.json")
}

fn authenticated() -> SessionStatus {
    SessionStatus::Authenticated(UserProfile::local())
}

#[tokio::test]
async fn test_fetch_loads_fixture_document() {
    let source = FileQuoteSource::new(fixture_path());

    let catalog = source.fetch(&authenticated()).await.unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(2).unwrap().author, "Socrates");
    assert_eq!(catalog.metadata().categories, vec!["Learning", "Wisdom"]);
}

#[tokio::test]
async fn test_fetch_refuses_unauthenticated_session() {
    let source = FileQuoteSource::new(fixture_path());

    let result = source.fetch(&SessionStatus::Unauthenticated).await;
    assert!(matches!(result, Err(FetchError::Unauthenticated)));

    // A session still being established is refused the same way
    let result = source.fetch(&SessionStatus::Loading).await;
    assert!(matches!(result, Err(FetchError::Unauthenticated)));
}

#[tokio::test]
async fn test_fetch_reports_missing_file() {
    let source = FileQuoteSource::new("no/such/quotes.json");

    let result = source.fetch(&authenticated()).await;
    assert!(matches!(
        result,
        Err(FetchError::Catalog(CatalogError::FileNotFound { .. }))
    ));
}

#[tokio::test]
async fn test_retry_is_a_fresh_fetch() {
    // First attempt fails against a missing path; a retry against the
    // fixed path succeeds, no state carried between attempts.
    let broken = FileQuoteSource::new("no/such/quotes.json");
    assert!(broken.fetch(&authenticated()).await.is_err());

    let fixed = FileQuoteSource::new(fixture_path());
    let catalog = fixed.fetch(&authenticated()).await.unwrap();
    assert_eq!(catalog.len(), 3);
}
