// File: crates/stock-series/src/indicators.rs
// Summary: Trailing-window scans (mean, sample std) and period-over-period percentage change.
// Outputs are aligned with the input: same length, NaN where a value is undefined.

use crate::stats;

/// Trailing mean over `window` values. Defined at `i` only when all values in
/// `i+1-window..=i` are finite.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, stats::mean)
}

/// Trailing sample standard deviation (n-1 denominator) over `window` values.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, stats::sample_std)
}

/// `(v[i] - v[i-1]) / v[i-1]`; the first entry and any non-finite result are NaN.
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    for (i, w) in values.windows(2).enumerate() {
        let change = (w[1] - w[0]) / w[0];
        if change.is_finite() {
            out[i + 1] = change;
        }
    }
    out
}

fn rolling(values: &[f64], window: usize, reduce: fn(&[f64]) -> f64) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 {
        return out;
    }
    for (start, w) in values.windows(window).enumerate() {
        if w.iter().all(|v| v.is_finite()) {
            out[start + window - 1] = reduce(w);
        }
    }
    out
}
