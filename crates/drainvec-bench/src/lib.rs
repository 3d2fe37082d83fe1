//! Benchmark workload builders for the `drainvec` container.
//!
//! Provides pre-built containers at the sizes the benches exercise so each
//! benchmark body measures a single operation, not setup.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use drainvec::DrainVec;

/// Elements per block used by the benchmark profiles. Small enough that
/// every profile crosses multiple block boundaries.
pub const BENCH_BLOCK_CAPACITY: usize = 64 * 1024;

/// Build a container holding `n` sequential `u64` values.
pub fn sequential_u64(n: usize) -> DrainVec<u64> {
    let mut vec = DrainVec::with_block_capacity(BENCH_BLOCK_CAPACITY);
    for i in 0..n {
        vec.push(i as u64);
    }
    vec
}

/// Reference profile: 1M elements, ~16 blocks.
pub fn reference_profile() -> DrainVec<u64> {
    sequential_u64(1_000_000)
}

/// Stress profile: 10M elements, ~160 blocks.
pub fn stress_profile() -> DrainVec<u64> {
    sequential_u64(10_000_000)
}
