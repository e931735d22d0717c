// Performance benchmarks for index construction, queries, and matching runs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rfpmatch::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

fn generate_catalog(size: usize) -> Arc<Catalog> {
    let families = [
        ("cloud", "managed cloud hosting infrastructure with servers"),
        ("plant", "plant floor production tracking for factories"),
        ("security", "encryption authentication and compliance reporting"),
        ("erp", "sap and oracle erp integration middleware"),
    ];

    let items = (0..size)
        .map(|i| {
            let (keyword, description) = families[i % families.len()];
            CatalogItem {
                sku: format!("SKU-{:04}", i),
                name: format!("Product {} {}", keyword, i),
                description: description.to_string(),
                category: keyword.to_string(),
                technical_keywords: vec![keyword.to_string()],
                specs: BTreeMap::new(),
                base_price: Money::from_major(100_000 + i as i64),
            }
        })
        .collect();

    Arc::new(Catalog::from_items(items).unwrap())
}

fn build_index(catalog: Arc<Catalog>) -> Arc<SimilarityIndex> {
    Arc::new(
        SimilarityIndex::build(
            catalog,
            Box::new(HashingEmbedder::default()),
            BuildOptions::default(),
        )
        .unwrap(),
    )
}

fn benchmark_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("rfpmatch", size), size, |b, &size| {
            let catalog = generate_catalog(size);
            b.iter(|| {
                let index = SimilarityIndex::build(
                    catalog.clone(),
                    Box::new(HashingEmbedder::default()),
                    BuildOptions::default(),
                )
                .unwrap();
                black_box(index.len());
            });
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("rfpmatch", size), size, |b, &size| {
            let index = build_index(generate_catalog(size));
            b.iter(|| {
                let hits = index
                    .query(
                        black_box("managed cloud hosting with high availability"),
                        3,
                        QueryOptions::default(),
                    )
                    .unwrap();
                black_box(hits);
            });
        });
    }

    group.finish();
}

fn benchmark_matching_run(c: &mut Criterion) {
    let index = build_index(generate_catalog(1000));
    let engine = MatchingEngine::new(index);

    let requirements: Vec<RequirementStatement> = (0..50)
        .map(|i| {
            RequirementStatement::new(
                format!("requirement {} must provide cloud hosting for the plant", i),
                1,
                Priority::Mandatory,
            )
        })
        .collect();

    c.bench_function("match_50_requirements", |b| {
        b.iter(|| {
            let result = engine.match_requirements(black_box(&requirements));
            black_box(result.match_rate);
        });
    });
}

criterion_group!(
    benches,
    benchmark_index_build,
    benchmark_query,
    benchmark_matching_run
);
criterion_main!(benches);
