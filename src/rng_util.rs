/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Draw `n` values uniformly from `[low, high)`.
pub(crate) fn f64_vec(rng: &mut fastrand::Rng, n: usize, low: f64, high: f64) -> Vec<f64> {
    (0..n).map(|_| f64_range(rng, low, high)).collect()
}
