use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use synckit_order_keys::{key_between, n_keys_between};

/// Benchmark a single key between two neighbours
fn bench_single_key(c: &mut Criterion) {
    c.bench_function("key_between_neighbours", |b| {
        b.iter(|| black_box(key_between(black_box("a0"), black_box("a1")).unwrap()));
    });
}

/// Benchmark appending to the end of a list (simulates typing new items)
fn bench_append_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_chain");

    for size in [10, 100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut last = String::new();
                for _ in 0..size {
                    last = key_between(&last, "").unwrap();
                }
                black_box(last)
            });
        });
    }

    group.finish();
}

/// Benchmark inserting repeatedly at the same spot (worst case key growth)
fn bench_repeated_bisection(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeated_bisection");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut low = "a0".to_string();
                for _ in 0..size {
                    low = key_between(&low, "a1").unwrap();
                }
                black_box(low)
            });
        });
    }

    group.finish();
}

/// Benchmark batch generation between two keys
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_keys_between");

    for n in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| black_box(n_keys_between("a0", "a2", n).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_key,
    bench_append_chain,
    bench_repeated_bisection,
    bench_batch
);
criterion_main!(benches);
