//! Demo harness for the quote board orchestrator.
//!
//! This binary drives the end-to-end flow against the bundled data file:
//! authenticated session, one fetch, a filter pass and page navigation.

use anyhow::Result;
use tracing::info;

use pipeline::{FilterChange, PageChange};
use server::QuoteBoard;
use sources::{FileQuoteSource, SessionStatus, UserProfile};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,server=debug,pipeline=debug")),
        )
        .init();

    let data_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/quotes.json".to_string());
    info!("Starting quote board demo against {}", data_file);

    let source = FileQuoteSource::new(&data_file);
    let session = SessionStatus::Authenticated(UserProfile::local());
    let mut board = QuoteBoard::new(source, session);

    board.load().await?;
    let user = board
        .session()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    info!("Signed in as {}", user);

    // First page, unfiltered
    if let Some(view) = board.page() {
        info!(
            "Page {}/{} of {} quotes (window {:?})",
            view.page, view.total_pages, view.total_matching, view.window
        );
        for quote in &view.quotes {
            info!("  \"{}\" — {}", quote.quote, quote.author);
        }
    }

    // Narrow to the first category from the metadata, then flip a page
    let category = board
        .catalog()
        .and_then(|c| c.metadata().categories.first().cloned());
    if let Some(category) = category {
        info!("Filtering by category {:?}", category);
        board.handle_filter(FilterChange::Category(Some(category)));
        board.handle_page(PageChange::Next);

        if let Some(view) = board.page() {
            info!(
                "Page {}/{} of {} matching quotes",
                view.page, view.total_pages, view.total_matching
            );
            for quote in &view.quotes {
                info!("  \"{}\" — {}", quote.quote, quote.author);
            }
        }
    }

    Ok(())
}
