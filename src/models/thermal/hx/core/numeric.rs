//! Guards for the closed-form relations.
//!
//! Every relation is written as an `Option` chain: a guard that fails returns
//! `None`, which skips that derivation and leaves the value unset.

/// Returns `x` if it is finite and non-zero.
pub(super) fn nonzero(x: f64) -> Option<f64> {
    (x.is_finite() && x != 0.0).then_some(x)
}

/// Returns `x` if it is finite and strictly positive.
pub(super) fn positive(x: f64) -> Option<f64> {
    (x.is_finite() && x > 0.0).then_some(x)
}

/// Natural log of `numerator / denominator`, if the ratio is positive.
pub(super) fn ln_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    positive(numerator / nonzero(denominator)?).map(f64::ln)
}

/// Rounds half away from zero to `decimals` decimal places.
pub(super) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
