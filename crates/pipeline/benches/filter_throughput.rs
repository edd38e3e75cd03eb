//! Benchmarks for the filter pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! This benchmarks a full filter pass and a render over a synthetic
//! catalog large enough to dwarf the real dataset.

use catalog::Quote;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{FilterSpec, ViewState, filter_quotes, render};

fn build_test_records(count: u32) -> Vec<Quote> {
    let categories = ["Wisdom", "Action", "Learning", "Philosophy", "Science"];
    let eras = ["Ancient", "Early Modern", "Modern"];
    let nationalities = ["Chinese", "Greek", "German", "English", "Indian"];

    (1..=count)
        .map(|id| Quote {
            id,
            author: format!("Author {id}"),
            quote: format!("Quotation number {id} about life and learning."),
            category: categories[id as usize % categories.len()].to_string(),
            era: eras[id as usize % eras.len()].to_string(),
            nationality: nationalities[id as usize % nationalities.len()].to_string(),
        })
        .collect()
}

fn bench_filter_all_axes(c: &mut Criterion) {
    let records = build_test_records(10_000);
    let spec = FilterSpec {
        query: "learning".to_string(),
        category: Some("Wisdom".to_string()),
        era: Some("Ancient".to_string()),
        nationality: None,
    };

    c.bench_function("filter_all_axes", |b| {
        b.iter(|| {
            let kept = filter_quotes(black_box(&records), black_box(&spec));
            black_box(kept)
        })
    });
}

fn bench_filter_identity(c: &mut Criterion) {
    let records = build_test_records(10_000);
    let spec = FilterSpec::default();

    c.bench_function("filter_identity", |b| {
        b.iter(|| {
            let kept = filter_quotes(black_box(&records), black_box(&spec));
            black_box(kept)
        })
    });
}

fn bench_render_page(c: &mut Criterion) {
    let records = build_test_records(10_000);
    let mut state = ViewState::default();
    state.spec.query = "life".to_string();
    state.page = 7;

    c.bench_function("render_page", |b| {
        b.iter(|| {
            let view = render(black_box(&records), black_box(&state));
            black_box(view)
        })
    });
}

criterion_group!(
    benches,
    bench_filter_all_axes,
    bench_filter_identity,
    bench_render_page
);
criterion_main!(benches);
