//! Lehia Radix Benchmarks
//!
//! Benchmarks for the radix tree and its completion cache, implemented with
//! the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use lehia_radix::RadixTree;

/// Deterministic word list with plenty of shared prefixes.
fn word_list(size: usize) -> Vec<String> {
    let stems = ["car", "cart", "care", "com", "con", "dog", "do", "over"];
    (0..size)
        .map(|i| format!("{}{:04}", stems[i % stems.len()], i / stems.len()))
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_insert");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let words = word_list(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &words, |b, words| {
            b.iter(|| {
                let mut tree = RadixTree::new();
                for word in words {
                    tree.insert(black_box(word));
                }
                tree
            });
        });
    }

    group.finish();
}

fn bench_autocomplete(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_autocomplete");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let words = word_list(10_000);
    let queries = ["c", "car", "cart00", "do", "over", "missing"];

    // Cold: every iteration starts from an unpopulated cache.
    group.bench_function("cold_cache", |b| {
        let mut tree = RadixTree::new();
        for word in &words {
            tree.insert(word);
        }
        b.iter(|| {
            tree.clear_cache();
            for query in &queries {
                black_box(tree.autocomplete(black_box(query), 50));
            }
        });
    });

    // Warm: repeated queries are served from the completion cache.
    group.bench_function("warm_cache", |b| {
        let mut tree = RadixTree::new();
        for word in &words {
            tree.insert(word);
        }
        for query in &queries {
            tree.autocomplete(query, 50);
        }
        b.iter(|| {
            for query in &queries {
                black_box(tree.autocomplete(black_box(query), 50));
            }
        });
    });

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_contains");
    group.measurement_time(Duration::from_secs(2));

    let words = word_list(10_000);
    let mut tree = RadixTree::new();
    for word in &words {
        tree.insert(word);
    }

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("all_members", |b| {
        b.iter(|| {
            for word in &words {
                black_box(tree.contains(black_box(word)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_autocomplete, bench_contains);
criterion_main!(benches);
