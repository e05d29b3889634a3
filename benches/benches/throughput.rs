//! Streebog Criterion Benchmark
//!
//! Latency, bulk throughput, streaming and batch scaling for both digest
//! sizes, with SHA-2 of the same width as a reference point.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha256, Sha512};
use std::hint::black_box;
use streebog::Variant;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for short messages (one to a few blocks).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "0B"),
        (16, "16B"),
        (63, "63B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("streebog256", name), &input, |b, data| {
            b.iter(|| streebog::hash256(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("streebog512", name), &input, |b, data| {
            b.iter(|| streebog::hash512(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Throughput for larger buffers, against SHA-256/SHA-512.
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Throughput");
    group.sample_size(30);

    let sizes = [(64 * KB, "64KB"), (MB, "1MB"), (8 * MB, "8MB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("streebog256", name), &input, |b, data| {
            b.iter(|| streebog::hash256(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("streebog512", name), &input, |b, data| {
            b.iter(|| streebog::hash512(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha256", name), &input, |b, data| {
            b.iter(|| Sha256::digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha512", name), &input, |b, data| {
            b.iter(|| Sha512::digest(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Cost of the residual buffer for unaligned update sizes.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(30);

    let total_size = MB;
    let input = random_input(total_size);
    group.throughput(Throughput::Bytes(total_size as u64));

    for chunk_size in [13, 64, 100, 4 * KB, 64 * KB] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{chunk_size}B-chunks")),
            &chunk_size,
            |b, &chunk_sz| {
                b.iter(|| {
                    let mut hasher = streebog::Hasher::new(Variant::Streebog512);
                    for chunk in input.chunks(chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: VERIFICATION
// =============================================================================

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Verify");

    let input = random_input(4 * KB);
    let h256 = streebog::hash256(&input);
    let h512 = streebog::hash512(&input);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("verify256", |b| {
        b.iter(|| streebog::verify256(black_box(&input), black_box(&h256)))
    });
    group.bench_function("verify512", |b| {
        b.iter(|| streebog::verify512(black_box(&input), black_box(&h512)))
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 5: BATCH THREAD SCALING
// =============================================================================

/// Multi-core scaling of `hash_batch` using Rayon (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Batch-Scaling");
    group.sample_size(20);

    let inputs: Vec<Vec<u8>> = (0..256).map(|_| random_input(16 * KB)).collect();
    group.throughput(Throughput::Bytes((inputs.len() * 16 * KB) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| {
                    b.iter(|| streebog::hash_batch(black_box(&inputs), Variant::Streebog256))
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_throughput,
    bench_streaming,
    bench_verify,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
