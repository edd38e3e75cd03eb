use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use catalog::{parser, QuoteCatalog, QuoteId};
use pipeline::{FilterChange, PageChange, PageView};
use server::QuoteBoard;
use sources::{FileQuoteSource, SessionStatus, UserProfile};

/// QuoteCards - a card wall of curated quotations
#[derive(Parser)]
#[command(name = "quote-cards")]
#[command(about = "Browse, search and filter a curated wall of quotations", long_about = None)]
struct Cli {
    /// Path to the quotes JSON document
    #[arg(short, long, default_value = "data/quotes.json")]
    data_file: PathBuf,

    /// Cards shown per page
    #[arg(long, default_value = "4")]
    page_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the card wall with optional filters
    Browse {
        /// Page to display (1-indexed)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Free-text search over quote, author, category and nationality
        #[arg(long)]
        query: Option<String>,

        /// Keep only this exact category
        #[arg(long)]
        category: Option<String>,

        /// Keep only this exact era
        #[arg(long)]
        era: Option<String>,

        /// Keep only this exact nationality
        #[arg(long)]
        nationality: Option<String>,
    },

    /// Search quotes by free text (shorthand for browse --query)
    Search {
        /// Text to search for
        query: String,

        /// Page to display (1-indexed)
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// List the filterable categories, eras and nationalities
    Meta,

    /// Show a single quote card by id
    Show {
        /// Quote id to display
        #[arg(long)]
        id: QuoteId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let page_size =
        NonZeroUsize::new(cli.page_size).context("--page-size must be at least 1")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            page,
            query,
            category,
            era,
            nationality,
        } => {
            handle_browse(
                &cli.data_file,
                page_size,
                page,
                query,
                category,
                era,
                nationality,
            )
            .await?
        }
        Commands::Search { query, page } => {
            handle_browse(&cli.data_file, page_size, page, Some(query), None, None, None).await?
        }
        Commands::Meta => handle_meta(&cli.data_file)?,
        Commands::Show { id } => handle_show(&cli.data_file, id)?,
    }

    Ok(())
}

/// Handle the 'browse' and 'search' commands through the board
async fn handle_browse(
    data_file: &Path,
    page_size: NonZeroUsize,
    page: usize,
    query: Option<String>,
    category: Option<String>,
    era: Option<String>,
    nationality: Option<String>,
) -> Result<()> {
    let source = FileQuoteSource::new(data_file);
    let session = SessionStatus::Authenticated(UserProfile::local());
    let mut board = QuoteBoard::new(source, session).with_page_size(page_size);

    board
        .load()
        .await
        .with_context(|| format!("Failed to load quotes from {}", data_file.display()))?;

    // Filter edits reset the page, so apply them before navigating
    if let Some(query) = query {
        board.handle_filter(FilterChange::Query(query));
    }
    if let Some(category) = category {
        board.handle_filter(FilterChange::Category(Some(category)));
    }
    if let Some(era) = era {
        board.handle_filter(FilterChange::Era(Some(era)));
    }
    if let Some(nationality) = nationality {
        board.handle_filter(FilterChange::Nationality(Some(nationality)));
    }
    board.handle_page(PageChange::Goto(page));

    let view = board
        .page()
        .ok_or_else(|| anyhow!("Quote board is not ready"))?;
    print_page(&view);

    Ok(())
}

/// Handle the 'meta' command
fn handle_meta(data_file: &Path) -> Result<()> {
    let catalog = load_catalog(data_file)?;
    let metadata = catalog.metadata();

    println!(
        "{}",
        format!("{} quotes in {}", catalog.len(), data_file.display()).bold()
    );
    if let Some(description) = &metadata.description {
        println!("{description}");
    }

    print_axis("Categories", &metadata.categories, |q, value| {
        q.category == value
    }, &catalog);
    print_axis("Eras", &metadata.eras, |q, value| q.era == value, &catalog);
    print_axis("Nationalities", &metadata.nationalities, |q, value| {
        q.nationality == value
    }, &catalog);

    Ok(())
}

/// Handle the 'show' command
fn handle_show(data_file: &Path, id: QuoteId) -> Result<()> {
    let catalog = load_catalog(data_file)?;

    let quote = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Quote {} not found", id))?;
    print_card(quote);

    Ok(())
}

fn load_catalog(data_file: &Path) -> Result<QuoteCatalog> {
    parser::load_from_file(data_file)
        .with_context(|| format!("Failed to load quotes from {}", data_file.display()))
}

/// Print one value axis with per-value record counts
fn print_axis(
    title: &str,
    values: &[String],
    matches: impl Fn(&catalog::Quote, &str) -> bool,
    catalog: &QuoteCatalog,
) {
    println!("\n{}", title.bold().blue());
    for value in values {
        let count = catalog
            .quotes()
            .iter()
            .filter(|q| matches(q, value))
            .count();
        println!("  {} {} ({})", "•".green(), value, count);
    }
}

/// Print a page of cards with the navigation footer
fn print_page(view: &PageView<'_>) {
    if view.is_empty_result() {
        println!("{}", "No quotes match the current filters.".yellow());
        println!("Run again without filters to clear them.");
        return;
    }

    println!(
        "{}",
        format!(
            "Found {} quotes · page {} of {}",
            view.total_matching, view.page, view.total_pages
        )
        .bold()
    );
    println!();

    for quote in &view.quotes {
        print_card(quote);
    }

    if view.total_pages > 1 {
        let window: Vec<String> = view
            .window
            .iter()
            .map(|&page| {
                if page == view.page {
                    format!("[{page}]").bold().to_string()
                } else {
                    page.to_string()
                }
            })
            .collect();
        println!("Pages: {}", window.join(" "));
    }
}

/// Print a single quote card
fn print_card(quote: &catalog::Quote) {
    println!("  \u{201c}{}\u{201d}", quote.quote);
    println!(
        "      — {} · {} · {} · {}   (#{})",
        quote.author.cyan().bold(),
        quote.category.yellow(),
        quote.era.green(),
        quote.nationality.magenta(),
        quote.id
    );
    println!();
}
