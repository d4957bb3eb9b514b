//! Weighted-list parser benchmark.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use oregen_distribution::weighted_list;

fn bench_parse(c: &mut Criterion) {
    let short = "minecraft:coal_ore,0.99; minecraft:diamond_ore,0.01;";
    let long: String = (0..64)
        .map(|i| format!("minecraft:block_{i}, {}.{:02};", i % 3, i % 100))
        .collect();

    c.bench_function("parse_short_list", |b| {
        b.iter(|| weighted_list::parse(black_box(short)));
    });

    c.bench_function("parse_64_entry_list", |b| {
        b.iter(|| weighted_list::parse(black_box(&long)));
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
