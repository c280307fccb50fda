//! Shared data generators and filter fixtures for the benchmarks.
#![allow(dead_code)]

use bloomview::{BloomFilterView, FilterParams, FilterValue};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed so runs compare like with like
pub const SEED: u64 = 0x5eed_b100_0f11_7e55;

/// Filter sizes in bits
///
/// From a single cache line's worth of words up to a few megabytes.
pub const BIT_COUNTS: &[usize] = &[
    1 << 10, // 128 B
    1 << 16, // 8 KB
    1 << 20, // 128 KB
    1 << 24, // 2 MB
];

/// Hash function counts commonly shipped with stored filters
pub const HASH_COUNTS: &[usize] = &[1, 3, 5, 7, 10, 14];

/// Key lengths for the byte hashes
pub const KEY_LENGTHS: &[usize] = &[0, 3, 8, 16, 32, 64, 256, 1024];

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Random alphanumeric strings of length `len`
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    let mut rng = rng();
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// Random byte keys of length `len`
pub fn generate_keys(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = rng();
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen()).collect())
        .collect()
}

pub fn generate_i64s(count: usize) -> Vec<i64> {
    let mut rng = rng();
    (0..count).map(|_| rng.gen()).collect()
}

pub fn generate_f64s(count: usize) -> Vec<f64> {
    let mut rng = rng();
    (0..count).map(|_| rng.gen_range(-1e9..1e9)).collect()
}

/// Words for a filter that has had `values` inserted
///
/// Mirrors what a writer would store: bit `i` lives in word `i / 64`,
/// byte-swapped.
pub fn build_words<'v>(
    params: FilterParams,
    values: impl IntoIterator<Item = FilterValue<'v>>,
) -> Vec<u64> {
    let empty = vec![0u64; params.word_count()];
    let mut words = empty.clone();
    if let Ok(probe) = BloomFilterView::from_params(params, &empty) {
        for value in values {
            for idx in probe.probe_positions(value.digest()) {
                words[idx >> 6] |= (1u64 << (idx % 64)).swap_bytes();
            }
        }
    }
    words
}

/// Optimal k for `bits_per_item`, the usual `ln 2 * m / n`
pub fn optimal_hash_count(bits_per_item: usize) -> usize {
    ((bits_per_item as f64) * std::f64::consts::LN_2).round().max(1.0) as usize
}

/// Observed false positive rate over `probes`
pub fn measure_fpr(filter: &BloomFilterView<'_>, probes: &[i64]) -> f64 {
    let hits = probes.iter().filter(|&&v| filter.test_long(v)).count();
    hits as f64 / probes.len() as f64
}
