//! Benchmarks for the filter engine
//!
//! Run with: cargo bench --package specification
//!
//! Compares the sequential scan with the rayon scan on a synthetic catalog.

use catalog::{Color, Product, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use specification::specs::{ColorSpecification, SizeSpecification};
use specification::{FilterEngine, SpecificationExt};

fn synthetic_catalog(len: usize) -> Vec<Product> {
    (0..len)
        .map(|i| {
            Product::new(
                format!("product-{i}"),
                Color::ALL[i % Color::ALL.len()],
                Size::ALL[(i / 7) % Size::ALL.len()],
            )
        })
        .collect()
}

fn bench_sequential(c: &mut Criterion) {
    let products = synthetic_catalog(200_000);
    let engine = FilterEngine::new().with_specification(
        ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large)),
    );

    c.bench_function("filter_sequential", |b| {
        b.iter(|| {
            let matches = engine.apply(black_box(&products)).unwrap();
            black_box(matches.len())
        })
    });
}

fn bench_parallel(c: &mut Criterion) {
    let products = synthetic_catalog(200_000);
    let engine = FilterEngine::new()
        .with_specification(
            ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large)),
        )
        .with_parallel_threshold(1);

    c.bench_function("filter_parallel", |b| {
        b.iter(|| {
            let matches = engine.apply(black_box(&products)).unwrap();
            black_box(matches.len())
        })
    });
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
