//! seedrev Criterion Benchmark
//!
//! Per-guess cost of the finalizer and its inverse, and search throughput
//! over fixed guess windows.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use seedrev::finalizer::{finalize, unmix_known_high};
use seedrev::{Recoverer, SearchRange, Stream};
use std::hint::black_box;

const KI: u64 = 1024;
const MI: u64 = 1024 * 1024;

fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    rand::rng().fill(&mut bytes[..]);
    u64::from_le_bytes(bytes)
}

// =============================================================================
// BENCHMARK 1: PRIMITIVES
// =============================================================================

/// Hot path cost: one inverse plus one forward check per guess.
fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Primitives");
    let state = random_seed();

    group.bench_function("finalize", |b| b.iter(|| finalize(black_box(state))));
    group.bench_function("unmix_known_high", |b| {
        b.iter(|| unmix_known_high(black_box(0x6F7C_00DB), black_box(0x2BAE_8C15)))
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 2: SEARCH WINDOWS
// =============================================================================

/// Guesses per second for an unsatisfiable search (no early exit).
fn bench_search_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Search-Windows");
    group.sample_size(20);

    // Outputs from three unrelated streams never verify.
    let outputs = [
        Stream::new(random_seed()).next_u32(),
        Stream::new(random_seed()).next_u32(),
        Stream::new(random_seed()).next_u32(),
    ];

    let windows = [(64 * KI, "64Ki"), (MI, "1Mi"), (16 * MI, "16Mi")];

    for (size, name) in windows {
        let range = SearchRange::new(0, size).unwrap();
        let recoverer = Recoverer::new().with_range(range);
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &outputs,
            |b, outputs| b.iter(|| recoverer.recover(black_box(outputs))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: PARTITIONING
// =============================================================================

/// Partition count sensitivity on a fixed 16 Mi window.
#[cfg(feature = "multithread")]
fn bench_partitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Partitions");
    group.sample_size(20);

    let outputs: [u32; 3] = [0x0000_0001, 0x0000_0002, 0x0000_0003];
    let range = SearchRange::new(0, 16 * MI).unwrap();
    group.throughput(Throughput::Elements(range.len()));

    for parts in [1, 4, 16, 64, 256] {
        let recoverer = Recoverer::new().with_range(range).with_partitions(parts);
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(parts),
            &outputs,
            |b, outputs| b.iter(|| recoverer.recover(black_box(outputs))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_primitives, bench_search_windows);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_partitions);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
