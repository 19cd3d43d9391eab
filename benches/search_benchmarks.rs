//! Performance benchmarks for search functionality.
//!
//! These benchmarks measure search performance under various conditions:
//! - Different collection sizes
//! - Queries matching many, few or no contacts

use contact_book::{
    Contact, ContactBuilder, ContactSearcher, ContactVariant, OrganizationContactBuilder,
    PersonContactBuilder, SchemaRegistry, ScriptedConsole,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Build a mixed collection of `size` contacts, alternating people and
/// organizations.
fn create_test_contacts(size: usize, schemas: &SchemaRegistry) -> Vec<Contact> {
    let person_schema = *schemas.get(ContactVariant::Person).unwrap();
    let organization_schema = *schemas.get(ContactVariant::Organization).unwrap();
    let mut people = PersonContactBuilder::new();
    let mut organizations = OrganizationContactBuilder::new();

    (0..size)
        .map(|i| {
            if i % 2 == 0 {
                let mut console = ScriptedConsole::new([
                    format!("John{i}"),
                    format!("Smith{i}"),
                    "1970-01-01".to_string(),
                    "M".to_string(),
                    format!("+1 555 {:04}", i % 10_000),
                ]);
                people.create(&person_schema, &mut console).unwrap()
            } else {
                let mut console = ScriptedConsole::new([
                    format!("Shop {i}"),
                    format!("Wall St. {i}"),
                    format!("(202) 555-{:04}", i % 10_000),
                ]);
                organizations
                    .create(&organization_schema, &mut console)
                    .unwrap()
            }
        })
        .collect()
}

/// Benchmark search over growing collections.
fn bench_search_collection_sizes(c: &mut Criterion) {
    let schemas = SchemaRegistry::standard();
    let searcher = ContactSearcher::new(&schemas);

    let mut group = c.benchmark_group("search_collection_sizes");

    for size in [10, 100, 1_000, 5_000].iter() {
        let contacts = create_test_contacts(*size, &schemas);
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| {
                let _result = searcher.search(black_box(contacts), black_box("smith"));
            });
        });
    }

    group.finish();
}

/// Benchmark search with different query selectivity.
fn bench_search_queries(c: &mut Criterion) {
    let schemas = SchemaRegistry::standard();
    let searcher = ContactSearcher::new(&schemas);
    let contacts = create_test_contacts(1_000, &schemas);

    let mut group = c.benchmark_group("search_queries");

    for query in ["", "555", "(202)", "john42", "no such contact"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, &query| {
            b.iter(|| {
                let _result = searcher.search(black_box(&contacts), black_box(query));
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_search_collection_sizes, bench_search_queries
}

criterion_main!(benches);
