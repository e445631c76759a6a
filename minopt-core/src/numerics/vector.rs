//! Dense vector helpers on `[f64]`.
//!
//! Functions ending in `_into` write into a caller-provided buffer and resize
//! it to the input length. Functions ending in `_in_place` mutate their first
//! argument, which is always a solver-owned working buffer.

use rand::seq::SliceRandom;
use rand::Rng;

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

pub fn norm2(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// out = a - b
pub fn sub_into(out: &mut Vec<f64>, a: &[f64], b: &[f64]) {
    debug_assert_eq!(a.len(), b.len());
    out.resize(a.len(), 0.0);
    for i in 0..a.len() {
        out[i] = a[i] - b[i];
    }
}

/// Allocating form of [`sub_into`].
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(a.len());
    sub_into(&mut out, a, b);
    out
}

/// x += a * g, in place.
pub fn add_scaled(x: &mut [f64], a: f64, g: &[f64]) {
    debug_assert_eq!(x.len(), g.len());
    for (xi, gi) in x.iter_mut().zip(g.iter()) {
        *xi += a * gi;
    }
}

/// out = x + a * g
pub fn add_scaled_into(out: &mut Vec<f64>, x: &[f64], a: f64, g: &[f64]) {
    debug_assert_eq!(x.len(), g.len());
    out.resize(x.len(), 0.0);
    for i in 0..x.len() {
        out[i] = x[i] + a * g[i];
    }
}

pub fn scale_in_place(v: &mut [f64], a: f64) {
    for vi in v.iter_mut() {
        *vi *= a;
    }
}

pub fn negate_in_place(v: &mut [f64]) {
    for vi in v.iter_mut() {
        *vi = -*vi;
    }
}

/// Largest component magnitude, `0.0` for an empty vector.
pub fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0f64, |m, vi| m.max(vi.abs()))
}

/// Stopping test: every component satisfies `|v[i]| < eps`.
///
/// A NaN component never passes.
pub fn max_abs_below(v: &[f64], eps: f64) -> bool {
    v.iter().all(|vi| vi.abs() < eps)
}

/// Overwrite `buf` with a uniformly random permutation of `0..buf.len()`.
pub fn random_permutation_into<R: Rng + ?Sized>(buf: &mut [usize], rng: &mut R) {
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = i;
    }
    buf.shuffle(rng);
}

/// Uniformly random permutation of `0..n` (Fisher-Yates).
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut idx = vec![0usize; n];
    random_permutation_into(&mut idx, rng);
    idx
}
