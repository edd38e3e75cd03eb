//! The record source trait and the in-memory source.

use crate::error::{FetchError, Result};
use crate::session::SessionStatus;
use async_trait::async_trait;
use catalog::QuoteCatalog;

/// A source of the full quote record set.
///
/// Fetching is the single asynchronous suspension point in the system:
/// it resolves once with the whole catalog or fails with a FetchError.
/// The operation is not cancellable; a retry simply issues a new fetch.
/// Timeout policy, if any, belongs to the implementation.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the full record set for an authenticated session.
    ///
    /// Implementations must refuse `Loading` and `Unauthenticated`
    /// sessions with `FetchError::Unauthenticated` before doing any work.
    async fn fetch(&self, session: &SessionStatus) -> Result<QuoteCatalog>;
}

/// A source serving a catalog held in memory.
///
/// Stands in for the network route in tests and in the demo harness,
/// the way the demo page renders inline records without the protected
/// round-trip — but it still enforces the authentication gate.
#[derive(Debug, Clone)]
pub struct StaticQuoteSource {
    catalog: QuoteCatalog,
}

impl StaticQuoteSource {
    pub fn new(catalog: QuoteCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl QuoteSource for StaticQuoteSource {
    async fn fetch(&self, session: &SessionStatus) -> Result<QuoteCatalog> {
        if !session.is_authenticated() {
            return Err(FetchError::Unauthenticated);
        }

        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserProfile;
    use catalog::{Quote, QuoteCatalog};

    fn create_test_catalog() -> QuoteCatalog {
        QuoteCatalog::from_quotes(
            vec![Quote {
                id: 1,
                author: "Socrates".to_string(),
                quote: "Know thyself.".to_string(),
                category: "Wisdom".to_string(),
                era: "Ancient".to_string(),
                nationality: "Greek".to_string(),
            }],
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_static_source_serves_authenticated_session() {
        let source = StaticQuoteSource::new(create_test_catalog());
        let session = SessionStatus::Authenticated(UserProfile::local());

        let catalog = source.fetch(&session).await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_static_source_refuses_unauthenticated_session() {
        let source = StaticQuoteSource::new(create_test_catalog());

        let result = source.fetch(&SessionStatus::Unauthenticated).await;
        assert!(matches!(result, Err(FetchError::Unauthenticated)));

        let result = source.fetch(&SessionStatus::Loading).await;
        assert!(matches!(result, Err(FetchError::Unauthenticated)));
    }
}
