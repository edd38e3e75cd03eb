//! File-backed record source.
//!
//! Serves the protected quotes document from a path on disk, the way the
//! protected data route reads its JSON file per request. The
//! authentication gate is checked before any I/O happens.

use crate::error::{FetchError, Result};
use crate::session::SessionStatus;
use crate::source::QuoteSource;
use async_trait::async_trait;
use catalog::{CatalogError, QuoteCatalog, parser};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads the quotes document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuoteSource for FileQuoteSource {
    async fn fetch(&self, session: &SessionStatus) -> Result<QuoteCatalog> {
        if !session.is_authenticated() {
            debug!("Refusing fetch of protected data for unauthenticated session");
            return Err(FetchError::Unauthenticated);
        }

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FetchError::Catalog(CatalogError::FileNotFound {
                    path: self.path.display().to_string(),
                })
            } else {
                FetchError::Catalog(CatalogError::IoError(e))
            }
        })?;

        let catalog = parser::parse_str(&content)?;
        info!(
            "Loaded {} quotes from {}",
            catalog.len(),
            self.path.display()
        );

        Ok(catalog)
    }
}
