//! Percentiles over score and count distributions.

/// Returns the `q`-quantile (`0.0..=1.0`) of `values`.
///
/// Uses linear interpolation between the two closest ranks, so the result
/// for `q` is `v[i] + (v[j] - v[i]) * frac` with `i = floor(q·(n-1))`.
/// Returns `None` for an empty slice. NaN values are ignored.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q = q.clamp(0.0, 1.0);
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Returns the value at `percentile` (`0..=100`) of `values`.
#[inline]
pub fn percentile(values: &[f64], percentile: f64) -> Option<f64> {
    quantile(values, percentile / 100.0)
}
