//! Timing statistics and result verification helpers.
//!
//! Callers that repeat a sort several times aggregate the wall-clock
//! samples with these functions; the engines themselves never touch them.

use crate::core::Poscode;

/// Arithmetic mean of `samples`. Returns 0.0 for an empty set.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation of `samples` around `mean`, with Bessel's
/// correction. Returns 0.0 for fewer than two samples, where the corrected
/// variance is undefined.
pub fn std_deviation(samples: &[f64], mean: f64) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }

    let accum: f64 = samples
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum();
    (accum / (n - 1) as f64).sqrt()
}

/// Returns `true` when `codes` is ordered non-decreasingly.
pub fn is_sorted<const N: usize>(codes: &[Poscode<N>]) -> bool {
    codes.windows(2).all(|pair| pair[0] <= pair[1])
}
