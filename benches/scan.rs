//! Benchmarks for the signature sweep.
//!
//! The 256-key XOR brute force dominates the cost of loading a file, so the
//! sweep is measured over images of increasing size with the pattern planted
//! under a high key (worst case for the short-circuiting scan) and with no
//! pattern at all (full exhaustion).

extern crate au3scope;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use au3scope::scanner;

/// The container header pattern as it appears in a decoded image.
const NEEDLE: [u8; 16] = [
    0xa3, 0x48, 0x4b, 0xbe, 0x98, 0x6c, 0x4a, 0xa9, 0x99, 0x4c, 0x53, 0x0a, 0x86, 0xd6, 0x48,
    0x7d,
];

fn planted_image(size: usize, key: u8, offset: usize) -> Vec<u8> {
    let mut data = vec![0x90u8; size];
    for (i, &b) in NEEDLE.iter().enumerate() {
        data[offset + i] = b ^ key;
    }
    data
}

/// Benchmark a sweep that has to try most keys before hitting the plant.
fn bench_scan_high_key(c: &mut Criterion) {
    let data = planted_image(256 * 1024, 0xFE, 128 * 1024);

    c.bench_function("scan_256k_key_fe", |b| {
        b.iter(|| {
            let located = scanner::locate(black_box(&data)).unwrap();
            black_box(located)
        });
    });
}

/// Benchmark the cheap case: the plant matches under the lowest key.
fn bench_scan_low_key(c: &mut Criterion) {
    let data = planted_image(256 * 1024, 0x00, 128 * 1024);

    c.bench_function("scan_256k_key_00", |b| {
        b.iter(|| {
            let located = scanner::locate(black_box(&data)).unwrap();
            black_box(located)
        });
    });
}

/// Benchmark full key exhaustion over an image with no container at all.
fn bench_scan_exhaustive_miss(c: &mut Criterion) {
    let data = vec![0x90u8; 256 * 1024];

    c.bench_function("scan_256k_miss", |b| {
        b.iter(|| {
            let result = scanner::locate(black_box(&data));
            black_box(result.is_err())
        });
    });
}

criterion_group!(
    benches,
    bench_scan_high_key,
    bench_scan_low_key,
    bench_scan_exhaustive_miss
);
criterion_main!(benches);
