//! Performance benchmarks for oxiutil-ascii85
//!
//! This benchmark suite evaluates:
//! - Encode/decode throughput for different data patterns
//! - Cost of the HTTP header escaping layer
//! - Parallel encoding (with the `parallel` feature)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiutil_ascii85::{decode, encode, header};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// All zero bytes - every group collapses to `z`
    pub fn zeros(size: usize) -> Vec<u8> {
        vec![0; size]
    }

    /// Random data - every group needs five characters
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - realistic payload for headers
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const SIZES: [(&str, usize); 3] = [
    ("1KB", 1024),
    ("64KB", 64 * 1024),
    ("1MB", 1024 * 1024),
];

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("zeros", test_data::zeros as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| black_box(encode(black_box(data))));
            });
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let encoded = encode(&generator(size));
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &encoded, |b, encoded| {
                b.iter(|| black_box(decode(black_box(encoded)).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("header");

    for (size_name, size) in SIZES {
        let encoded = encode(&test_data::random(size));
        let escaped = header::encode(&encoded).unwrap();

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::new("escape", size_name), &encoded, |b, text| {
            b.iter(|| black_box(header::encode(black_box(text)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("unescape", size_name), &escaped, |b, text| {
            b.iter(|| black_box(header::decode(black_box(text)).unwrap()));
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    use oxiutil_ascii85::encode_parallel;

    let mut group = c.benchmark_group("parallel");
    let data = test_data::random(16 * 1024 * 1024);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.sample_size(10);
    group.bench_function("serial_16MB", |b| b.iter(|| black_box(encode(black_box(&data)))));
    group.bench_function("parallel_16MB", |b| {
        b.iter(|| black_box(encode_parallel(black_box(&data))))
    });

    group.finish();
}

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_encode, bench_decode, bench_header);

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_encode, bench_decode, bench_header, bench_parallel);

criterion_main!(benches);
