//! Tree insertion benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbor_tree::AvlTree;

fn ascending_keys(n: i64) -> Vec<i64> {
    (0..n).collect()
}

/// Deterministic scattered sequence (Weyl-style multiplicative hash).
fn scattered_keys(n: u64) -> Vec<i64> {
    (0..n)
        .map(|i| (i.wrapping_mul(2_654_435_761) % 1_048_576) as i64)
        .collect()
}

fn insert_ascending(c: &mut Criterion) {
    let keys = ascending_keys(1_000);
    c.bench_function("insert_ascending_1k", |b| {
        b.iter(|| {
            let tree: AvlTree<i64> = black_box(&keys).iter().copied().collect();
            tree.height()
        })
    });
}

fn insert_scattered(c: &mut Criterion) {
    let keys = scattered_keys(1_000);
    c.bench_function("insert_scattered_1k", |b| {
        b.iter(|| {
            let tree: AvlTree<i64> = black_box(&keys).iter().copied().collect();
            tree.height()
        })
    });
}

criterion_group!(benches, insert_ascending, insert_scattered);
criterion_main!(benches);
