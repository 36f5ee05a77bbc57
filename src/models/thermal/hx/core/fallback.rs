//! Conductance estimates used when no topology or contact formula applied.

use tracing::trace;

use super::{
    ConductanceSource, SolveConfig,
    numeric::{ln_ratio, positive},
    state::State,
};

/// `K = Q / (T̄_h - T̄_c)`, tried only once an entropy production exists.
pub(super) fn mean_delta(state: State) -> State {
    if state.entropy_production.is_none() {
        return state;
    }
    let k = || -> Option<f64> {
        let difference = state.hot.mean_temperature()? - state.cold.mean_temperature()?;
        Some(state.heat_duty? / positive(difference)?)
    };
    state.with_conductance(k(), ConductanceSource::MeanDelta)
}

/// `K = Q / LMTD` over the terminal differences `Th_in - Tc_out` and
/// `Th_out - Tc_in`.
pub(super) fn lmtd(state: State, config: &SolveConfig) -> State {
    let k = || -> Option<f64> {
        let q = state.heat_duty?;
        let lmtd = log_mean_difference(
            state.hot.inlet? - state.cold.outlet?,
            state.hot.outlet? - state.cold.inlet?,
        )?;
        if lmtd <= config.lmtd_epsilon {
            trace!(lmtd, "log-mean difference too small, step skipped");
            return None;
        }
        Some(q / lmtd)
    };
    state.with_conductance(k(), ConductanceSource::Lmtd)
}

/// Log-mean of two positive terminal differences.
fn log_mean_difference(dt1: f64, dt2: f64) -> Option<f64> {
    positive(dt1)?;
    positive(dt2)?;
    if dt1 == dt2 {
        return Some(dt1);
    }
    Some((dt1 - dt2) / ln_ratio(dt1, dt2)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::hx::core::{Schema, test_support::water_like_input};

    #[test]
    fn log_mean() {
        assert_relative_eq!(
            log_mean_difference(50.0, 40.0).unwrap(),
            10.0 / 1.25_f64.ln()
        );
        assert_relative_eq!(log_mean_difference(20.0, 20.0).unwrap(), 20.0);
        assert_eq!(log_mean_difference(20.0, 0.0), None);
        assert_eq!(log_mean_difference(-5.0, 10.0), None);
    }

    #[test]
    fn mean_delta_needs_entropy_production() {
        let state = State::prepare(&water_like_input(Schema::Mixing), &SolveConfig::default());
        assert_eq!(mean_delta(state).conductance, None);

        let state = mean_delta(State {
            entropy_production: Some(-0.1),
            ..state
        });
        assert_relative_eq!(state.conductance.unwrap(), 84.0 / 45.0, epsilon = 1e-9);
        assert_eq!(state.conductance_source, Some(ConductanceSource::MeanDelta));
    }

    #[test]
    fn lmtd_from_terminal_differences() {
        let config = SolveConfig::default();
        let state = lmtd(
            State::prepare(&water_like_input(Schema::Mixing), &config),
            &config,
        );

        assert_relative_eq!(
            state.conductance.unwrap(),
            84.0 * 1.25_f64.ln() / 10.0,
            epsilon = 1e-9
        );
        assert_eq!(state.conductance_source, Some(ConductanceSource::Lmtd));
    }
}
