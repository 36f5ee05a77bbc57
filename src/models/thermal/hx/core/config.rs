use crate::support::mixture::SHARE_TOLERANCE;

/// Tunable constants for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveConfig {
    /// Allowed deviation of a mixture's share sum from one.
    ///
    /// The solver itself never rejects a mixture; this is used by the
    /// readiness check on [`ExchangerInput`](super::ExchangerInput).
    pub share_tolerance: f64,

    /// Decimal places kept when inferring the heat duty (kW) or the hot
    /// outlet temperature (K).
    pub rounding_decimals: i32,

    /// A log-mean temperature difference (K) at or below this magnitude is
    /// treated as zero.
    pub lmtd_epsilon: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            share_tolerance: SHARE_TOLERANCE,
            rounding_decimals: 6,
            lmtd_epsilon: 1e-12,
        }
    }
}
