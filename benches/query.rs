//! Membership query benchmarks
//!
//! # Test Scenarios
//!
//! 1. **By Size**: Query latency vs bit array size
//!    - Small arrays stay in L1, large ones go to RAM
//!
//! 2. **Hit vs Miss**: Present vs absent values
//!    - Misses short-circuit on the first clear bit
//!
//! 3. **By Hash Count**: Cost of more probes per query
//!
//! 4. **Backing**: `&[u64]` words vs a raw byte blob
//!
//! 5. **Batch**: `test_batch` over many values
//!
//! 6. **False Positive Measurement**: Observed vs theoretical rate

use bloomview::{BloomFilterView, FilterParams, FilterValue};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

/// Bits per inserted value for the fixtures
const BITS_PER_ITEM: usize = 10;

fn fixture(bit_count: usize, hash_count: usize) -> (FilterParams, Vec<i64>, Vec<u64>) {
    let params = FilterParams::new(bit_count, hash_count).expect("valid fixture params");
    let inserted = generate_i64s(bit_count / BITS_PER_ITEM);
    let words = build_words(params, inserted.iter().map(|&v| FilterValue::Long(v)));
    (params, inserted, words)
}

fn bench_query_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_by_size");
    group.throughput(Throughput::Elements(1));

    for &bit_count in BIT_COUNTS {
        let (params, inserted, words) = fixture(bit_count, 7);
        let filter = BloomFilterView::from_params(params, &words).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(bit_count), &inserted, |b, keys| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.test_long(black_box(keys[idx % keys.len()]));
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

fn bench_query_hit_vs_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_hit_vs_miss");
    group.throughput(Throughput::Elements(1));

    let (params, inserted, words) = fixture(1 << 20, 7);
    let filter = BloomFilterView::from_params(params, &words).unwrap();
    let absent: Vec<i64> = inserted.iter().map(|v| v.wrapping_add(1)).collect();

    group.bench_function("hit", |b| {
        let mut idx = 0;
        b.iter(|| {
            let hit = filter.test_long(black_box(inserted[idx % inserted.len()]));
            idx += 1;
            hit
        });
    });

    group.bench_function("miss", |b| {
        let mut idx = 0;
        b.iter(|| {
            let hit = filter.test_long(black_box(absent[idx % absent.len()]));
            idx += 1;
            hit
        });
    });

    group.bench_function("null", |b| {
        b.iter(|| filter.test_bytes(black_box(None)));
    });

    group.finish();
}

fn bench_query_by_hash_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_by_hash_count");
    group.throughput(Throughput::Elements(1));

    for &k in HASH_COUNTS {
        let (params, inserted, words) = fixture(1 << 16, k);
        let filter = BloomFilterView::from_params(params, &words).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(k), &inserted, |b, keys| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.test_long(black_box(keys[idx % keys.len()]));
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

fn bench_query_backing(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_backing");
    group.throughput(Throughput::Elements(1));

    let strings = generate_strings(6_000, 32);
    let params = FilterParams::new(1 << 16, 7).unwrap();
    let words = build_words(params, strings.iter().map(|s| FilterValue::from(s.as_str())));
    let blob: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();

    let from_words = BloomFilterView::from_params(params, &words).unwrap();
    let from_blob = BloomFilterView::from_bytes(params, &blob).unwrap();

    for (name, filter) in [("words", from_words), ("bytes", from_blob)] {
        group.bench_function(name, |b| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.test_bytes(Some(black_box(strings[idx % strings.len()].as_bytes())));
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

fn bench_query_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_batch");

    let (params, inserted, words) = fixture(1 << 20, 7);
    let filter = BloomFilterView::from_params(params, &words).unwrap();

    for &batch in &[10usize, 100, 1_000, 10_000] {
        let values: Vec<FilterValue<'_>> = inserted
            .iter()
            .cycle()
            .take(batch)
            .map(|&v| FilterValue::Long(v))
            .collect();

        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::from_parameter(batch), &values, |b, values| {
            b.iter(|| filter.test_batch(black_box(values.iter().copied())));
        });
    }

    group.finish();
}

fn bench_false_positive_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("false_positive_rate");

    for &bits_per_item in &[4usize, 8, 16] {
        let bit_count = 1 << 16;
        let k = optimal_hash_count(bits_per_item);
        let params = FilterParams::new(bit_count, k).unwrap();
        let inserted = (0..(bit_count / bits_per_item) as i64).map(FilterValue::Long);
        let words = build_words(params, inserted);
        let filter = BloomFilterView::from_params(params, &words).unwrap();

        // Keys beyond the inserted range are all true negatives
        let probes: Vec<i64> = (1_000_000_000..1_000_010_000).collect();
        let observed = measure_fpr(&filter, &probes);
        let theoretical = (1.0 - (-(k as f64) / bits_per_item as f64).exp()).powi(k as i32);
        println!(
            "bits/item={bits_per_item} k={k}: observed FPR {observed:.5}, theoretical {theoretical:.5}"
        );

        group.bench_with_input(BenchmarkId::from_parameter(bits_per_item), &probes, |b, probes| {
            b.iter(|| measure_fpr(&filter, black_box(probes)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_query_by_size,
    bench_query_hit_vs_miss,
    bench_query_by_hash_count,
    bench_query_backing,
    bench_query_batch,
    bench_false_positive_rate,
);

criterion_main!(benches);
