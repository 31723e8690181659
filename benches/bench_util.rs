#![allow(dead_code)]

use criterion::{BenchmarkGroup, Criterion, black_box};
use quadmaths::F128;
use std::time::Duration;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;
const RNG_DENOM: f64 = (1u64 << 53) as f64;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

pub fn uniform_f64(state: &mut u64) -> f64 {
    let bits = lcg_next(state) >> 11;
    (bits as f64) / RNG_DENOM
}

/// Uniform binary128 inputs in [min, max) with random low significand bits,
/// so the f64-representable shortcut never kicks in.
pub fn gen_range(count: usize, min: f64, max: f64, seed: u64) -> Vec<F128> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let x = F128::from_f64(min + uniform_f64(&mut state) * span);
        let noise = (lcg_next(&mut state) >> 4) as u128;
        values.push(F128::from_bits(x.to_bits() ^ noise));
    }
    values
}

pub fn widen(inputs: &[f64]) -> Vec<F128> {
    inputs.iter().map(|&x| F128::from_f64(x)).collect()
}

pub fn bench_inputs<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[F128],
    quad: F,
    baseline: G,
) where
    F: Fn(F128) -> F128 + Copy,
    G: Fn(f64) -> f64 + Copy,
{
    group.bench_function("quadmaths", |b| {
        b.iter(|| {
            let mut acc = F128::ZERO;
            for &x in inputs {
                acc += quad(black_box(x));
            }
            black_box(acc)
        })
    });
    let narrow: Vec<f64> = inputs.iter().map(|x| x.to_f64()).collect();
    group.bench_function("f64-std", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &narrow {
                acc += baseline(black_box(x));
            }
            black_box(acc)
        })
    });
}

#[cfg(feature = "mpfr")]
pub fn bench_mpfr<G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[F128],
    reference: G,
) where
    G: Fn(&mut rug::Float) + Copy,
{
    let floats: Vec<rug::Float> = inputs
        .iter()
        .map(|x| rug::Float::with_val(113, x.to_f64()))
        .collect();
    group.bench_function("mpfr-113", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for x in &floats {
                let mut v = x.clone();
                reference(&mut v);
                acc += v.to_f64();
            }
            black_box(acc)
        })
    });
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3))
}
