//! Benchmarks for style resolution

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flip_scout::resolve::{resolve_style, StyleInput};

fn catalog() -> Vec<String> {
    ["LX", "EX", "EX-L", "Sport Touring", "Touring Elite"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn benchmark_trim_match(c: &mut Criterion) {
    let catalog = catalog();
    let input = StyleInput {
        catalog: &catalog,
        trim: Some("EX-L"),
        description: "",
    };

    c.bench_function("style_trim_match", |b| {
        b.iter(|| resolve_style(black_box(&input)))
    });
}

fn benchmark_description_scan(c: &mut Criterion) {
    let catalog = catalog();
    let description = "one owner garage kept sport touring with navigation heated leather \
                       seats new tires recently serviced no accidents clean title runs and \
                       drives great priced to sell this week only serious buyers please"
        .to_string();
    let input = StyleInput {
        catalog: &catalog,
        trim: None,
        description: &description,
    };

    c.bench_function("style_description_scan", |b| {
        b.iter(|| resolve_style(black_box(&input)))
    });
}

criterion_group!(benches, benchmark_trim_match, benchmark_description_scan);
criterion_main!(benches);
