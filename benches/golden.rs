//! Benchmarks for the golden model.
//!
//! Measures encoder, decoder and full vector generation throughput across
//! data patterns and window sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzgold::{compress, decompress, LzConfig, TestVectors};
use std::hint::black_box;

/// Generate random (incompressible) data
fn generate_random_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    b"ABCDABCDABCDABCD".iter().cycle().take(size).copied().collect()
}

/// Generate text-like data over a small vocabulary
fn generate_text_data(size: usize) -> Vec<u8> {
    let words: [&[u8]; 6] = [b"the ", b"quick ", b"brown ", b"fox ", b"jumps ", b"over "];
    let mut data = Vec::with_capacity(size);
    let mut i = 0usize;
    while data.len() < size {
        let word = words[(i * 7 + i / 3) % words.len()];
        let remaining = size - data.len();
        data.extend_from_slice(&word[..remaining.min(word.len())]);
        i += 1;
    }
    data
}

fn bench_compress_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_window");
    let size = 64 * 1024;
    let data = generate_text_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    for window in [16usize, 256, 4096].iter() {
        group.bench_with_input(BenchmarkId::new("window", window), &data, |b, data| {
            b.iter(|| compress(black_box(data), *window, 15));
        });
    }

    group.finish();
}

fn bench_data_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_patterns");
    let size = 64 * 1024;
    group.throughput(Throughput::Bytes(size as u64));

    let patterns = [
        ("random", generate_random_data(size)),
        ("repetitive", generate_repetitive_data(size)),
        ("text", generate_text_data(size)),
    ];

    for (name, data) in patterns.iter() {
        group.bench_with_input(BenchmarkId::new("compress", name), data, |b, data| {
            b.iter(|| compress(black_box(data), 16, 15));
        });

        let tokens = compress(data, 16, 15);
        group.bench_with_input(BenchmarkId::new("decompress", name), &tokens, |b, tokens| {
            b.iter(|| decompress(black_box(tokens), 16).unwrap());
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let config = LzConfig { window_size: 15, ..Default::default() };

    for size in [1024usize, 16 * 1024, 64 * 1024].iter() {
        let data = generate_text_data(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("text", size), &data, |b, data| {
            b.iter(|| TestVectors::generate(black_box(data), &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress_windows, bench_data_patterns, bench_generate);
criterion_main!(benches);
