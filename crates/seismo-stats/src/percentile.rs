//! Interpolated percentiles over sorted samples
//!
//! Percentile `p` of sorted ascending values `v[0..n-1]` is taken at the
//! fractional index `idx = (p/100)(n-1)`, interpolating linearly between
//! `v[floor(idx)]` and `v[ceil(idx)]`. This is the common "linear" quantile
//! definition, so `percentile(v, 50)` equals the textbook median for both
//! odd and even sample sizes.

/// Collect the finite values of a sample, sorted ascending
pub fn sorted_finite(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.into_iter().filter(|value| value.is_finite()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite values compare"));
    sorted
}

/// Interpolated percentile of an ascending slice; `None` on empty input
///
/// `p` is clamped to [0, 100].
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let p = p.clamp(0.0, 100.0);
    let idx = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = idx - lo as f64;
    Some(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
}

/// Median of an ascending slice; `None` on empty input
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    percentile_sorted(sorted, 50.0)
}
