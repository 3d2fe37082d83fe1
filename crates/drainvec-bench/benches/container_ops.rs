//! Criterion micro-benchmarks for append, iteration, and drain operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drainvec::DrainVec;
use drainvec_bench::{reference_profile, sequential_u64, BENCH_BLOCK_CAPACITY};

/// Append throughput: 1M pushes including block allocations.
fn bench_push(c: &mut Criterion) {
    c.bench_function("push_1m", |b| {
        b.iter(|| {
            let mut vec = DrainVec::with_block_capacity(BENCH_BLOCK_CAPACITY);
            for i in 0..1_000_000u64 {
                vec.push(black_box(i));
            }
            vec
        });
    });
}

/// Borrowed iteration over the reference profile.
fn bench_iter(c: &mut Criterion) {
    let vec = reference_profile();
    c.bench_function("iter_sum_1m", |b| {
        b.iter(|| {
            let sum: u64 = vec.iter().sum();
            black_box(sum)
        });
    });
}

/// Random access through the index mapping.
fn bench_index(c: &mut Criterion) {
    let vec = reference_profile();
    c.bench_function("index_strided_1m", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            let mut i = 0;
            while i < vec.len() {
                acc = acc.wrapping_add(vec[i]);
                i += 4097;
            }
            black_box(acc)
        });
    });
}

/// Full drain: consumes the container and frees blocks as it goes.
/// Rebuilds per iteration, so compare against `push_1m` for the net cost.
fn bench_drain(c: &mut Criterion) {
    c.bench_function("drain_1m", |b| {
        b.iter(|| {
            let mut vec = sequential_u64(1_000_000);
            let sum: u64 = vec.drain().sum();
            black_box(sum)
        });
    });
}

/// Clear and rebuild a quarter-full container.
fn bench_clear_rebuild(c: &mut Criterion) {
    c.bench_function("clear_rebuild_256k", |b| {
        b.iter(|| {
            let mut vec = sequential_u64(256 * 1024);
            vec.clear();
            for i in 0..1024u64 {
                vec.push(i);
            }
            vec
        });
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_iter,
    bench_index,
    bench_drain,
    bench_clear_rebuild
);
criterion_main!(benches);
