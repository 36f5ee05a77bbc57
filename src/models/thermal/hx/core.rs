//! Lumped two-stream heat exchanger with multi-component mixtures.
//!
//! One evaluation takes whatever the caller knows about the two streams and
//! returns whatever can be derived from it. Missing inputs never raise an
//! error: each derivation checks its own preconditions and is skipped when
//! they fail, leaving its output at the default.
//!
//! The stages run in a fixed order, each consuming the [`State`] produced by
//! the one before:
//!
//! 1. Capacitance rates `W = m_dot * c_mix(T_in)` for both streams.
//! 2. Heat duty from `(Th_in - Th_out) * W_c` if none was given.
//! 3. Hot outlet from `Th_in - Q / W_h` if it is missing.
//! 4. Auxiliary coefficients `A` and `B`.
//! 5. The single-component topology relations or the multi-component
//!    phase-contact formulas.
//! 6. `K` from the mean temperature difference.
//! 7. `K` from the log-mean temperature difference.

mod config;
mod contact;
mod fallback;
mod given_k;
mod input;
mod numeric;
mod results;
mod schema;
mod state;
mod sweep;

#[cfg(test)]
mod test_support;

pub use config::SolveConfig;
pub use contact::ContactType;
pub use given_k::{GivenKConfig, GivenKError, GivenKSolution, given_k};
pub use input::{ExchangerInput, Stream};
pub use results::{ConductanceSource, Solution};
pub use schema::{ParseSchemaError, Schema};
pub use sweep::{SweepPoint, vary_first_share};

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermalConductance, ThermodynamicTemperature},
        power::kilowatt,
        thermal_conductance::kilowatt_per_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::units::EntropyRate;

use state::State;

/// Which family of formulas applies to the pair of mixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    /// Both streams are a single component.
    Single,
    /// Any other pairing, including an empty side.
    Multi,
}

impl Regime {
    fn of(input: &ExchangerInput) -> Self {
        match (input.cold_mixture.len(), input.hot_mixture.len()) {
            (1, 1) => Self::Single,
            _ => Self::Multi,
        }
    }
}

/// Evaluates an exchanger with the default [`SolveConfig`].
#[must_use]
pub fn solve(input: &ExchangerInput) -> Solution {
    solve_with(input, &SolveConfig::default())
}

/// Evaluates an exchanger.
///
/// Never fails. Values that cannot be derived from `input` are reported as
/// absent or zero in the returned [`Solution`].
#[must_use]
pub fn solve_with(input: &ExchangerInput, config: &SolveConfig) -> Solution {
    let state = State::prepare(input, config);

    let regime = Regime::of(input);
    debug!(
        ?regime,
        cold = input.cold_mixture.len(),
        hot = input.hot_mixture.len(),
        "selected regime"
    );

    let state = match regime {
        Regime::Single => input.schema.solve(state),
        Regime::Multi => contact::solve(state, &input.cold_mixture, &input.hot_mixture),
    };

    let state = fallback::lmtd(fallback::mean_delta(state), config);

    debug!(
        schema = %input.schema,
        q = ?state.heat_duty,
        k = ?state.conductance,
        source = ?state.conductance_source,
        sigma = ?state.entropy_production,
        "exchanger evaluated"
    );

    into_solution(state)
}

/// Reads the reportable values out of a finished state.
fn into_solution(state: State) -> Solution {
    let kw_per_k = ThermalConductance::new::<kilowatt_per_kelvin>;
    Solution {
        heat_duty: state
            .heat_duty
            .filter(|_| state.heat_duty_computed)
            .map(Power::new::<kilowatt>),
        hot_outlet_temperature: state
            .hot
            .outlet
            .filter(|_| state.hot_outlet_computed)
            .map(ThermodynamicTemperature::new::<kelvin>),
        entropy_production: state
            .entropy_production
            .map_or(EntropyRate::ZERO, EntropyRate::new::<kilowatt_per_kelvin>),
        conductance: state.conductance.map_or(ThermalConductance::ZERO, kw_per_k),
        conductance_source: state.conductance_source,
        contact_type: state.contact,
        cold_capacitance_rate: state
            .cold
            .capacitance_rate
            .map_or(ThermalConductance::ZERO, kw_per_k),
        hot_capacitance_rate: state
            .hot
            .capacitance_rate
            .map_or(ThermalConductance::ZERO, kw_per_k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::mixture::Mixture;

    use super::test_support::{single, water_like, water_like_input};

    fn kw(q: Option<Power>) -> f64 {
        q.map(|q| q.get::<kilowatt>()).unwrap()
    }

    fn kw_per_k(k: ThermalConductance) -> f64 {
        k.get::<kilowatt_per_kelvin>()
    }

    fn sigma(solution: &Solution) -> f64 {
        solution.entropy_production.get::<kilowatt_per_kelvin>()
    }

    #[test]
    fn regression_scenario_for_every_schema() {
        let expected_sigma = 4.2 * (330.0_f64 / 350.0).ln() + 4.2 * (300.0_f64 / 290.0).ln();
        let expected = [
            (Schema::Mixing, 2.8, "schema/contact"),
            (Schema::ParallelFlow, 2.1 * 3.0_f64.ln(), "schema/contact"),
            (Schema::ColdMixing, 84.0 / 45.0, "mean_delta"),
            (Schema::HotMixing, 4.2 * 2.0_f64.ln(), "schema/contact"),
            (Schema::CounterFlow, 2.1, "schema/contact"),
        ];

        for (schema, k, source) in expected {
            let solution = solve(&water_like_input(schema));

            assert_relative_eq!(kw(solution.heat_duty), 84.0);
            assert_eq!(solution.hot_outlet_temperature, None);
            assert_relative_eq!(sigma(&solution), expected_sigma, epsilon = 1e-9);
            assert_relative_eq!(sigma(&solution), -0.1045, epsilon = 1e-3);
            assert_relative_eq!(kw_per_k(solution.conductance), k, epsilon = 1e-9);
            assert_eq!(solution.k_source(), source, "{schema}");
            assert_eq!(solution.contact(), "");
        }
    }

    #[test]
    fn hot_outlet_inference_is_idempotent() {
        let first = solve(&water_like_input(Schema::Mixing));

        let mut input = water_like_input(Schema::Mixing);
        input.hot = input.hot.without_outlet();
        let second = solve(&input.with_heat_duty(first.heat_duty.unwrap()));

        assert_eq!(second.heat_duty, None);
        assert_relative_eq!(
            second.hot_outlet_temperature.unwrap().get::<kelvin>(),
            330.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn lmtd_when_schema_relation_is_unavailable() {
        // Without hot flow there is no W_h, hence no B for the parallel-flow
        // relation and no sensible entropy production.
        let mut input =
            water_like_input(Schema::ParallelFlow).with_heat_duty(Power::new::<kilowatt>(84.0));
        input.hot = Stream::from_working_units(350.0, 330.0, 0.0).unwrap();

        let solution = solve(&input);

        assert_eq!(solution.k_source(), "lmtd");
        assert_eq!(solution.conductance_source, Some(ConductanceSource::Lmtd));
        assert_relative_eq!(
            kw_per_k(solution.conductance),
            84.0 / (10.0 / 1.25_f64.ln()),
            epsilon = 1e-9
        );
        assert_relative_eq!(sigma(&solution), 0.0);
        assert_eq!(solution.heat_duty, None);
    }

    #[test]
    fn empty_mixtures_leave_defaults() {
        let input = ExchangerInput::new(
            Stream::from_working_units(290.0, 300.0, 1.0).unwrap(),
            Stream::from_working_units(350.0, 330.0, 1.0).unwrap(),
            Mixture::empty(),
            Mixture::empty(),
            Schema::CounterFlow,
        );

        let solution = solve(&input);

        assert_eq!(solution.heat_duty, None);
        assert_eq!(solution.conductance, ThermalConductance::ZERO);
        assert_eq!(solution.entropy_production, EntropyRate::ZERO);
        assert_eq!(solution.cold_capacitance_rate, ThermalConductance::ZERO);
        assert_eq!(solution.hot_capacitance_rate, ThermalConductance::ZERO);
        assert_eq!(solution.k_source(), "");
        assert_eq!(solution.contact_type, Some(ContactType::BothSensible));
    }

    #[test]
    fn known_conductance_yields_duty() {
        let k = 4.2 * 2.0_f64.ln();
        let mut input = water_like_input(Schema::HotMixing)
            .with_conductance(ThermalConductance::new::<kilowatt_per_kelvin>(k));
        input.cold = Stream::from_working_units(290.0, 0.0, 1.0).unwrap();

        let solution = solve(&input);

        assert_relative_eq!(kw(solution.heat_duty), 84.0, epsilon = 1e-9);
        assert_eq!(solution.k_source(), "given");
        assert_relative_eq!(kw_per_k(solution.conductance), k, epsilon = 1e-12);
        assert_relative_eq!(sigma(&solution), 0.0);
    }

    #[test]
    fn vapor_specific_heat_above_threshold() {
        let input = ExchangerInput::new(
            Stream::from_working_units(290.0, 300.0, 1.0).unwrap(),
            Stream::from_working_units(400.0, 380.0, 1.0).unwrap(),
            water_like(),
            single(373.0, 4.2, 2.0, 2260.0),
            Schema::Mixing,
        );

        let solution = solve(&input);

        assert_relative_eq!(kw_per_k(solution.cold_capacitance_rate), 4.2, epsilon = 1e-9);
        assert_relative_eq!(kw_per_k(solution.hot_capacitance_rate), 2.0, epsilon = 1e-9);
        assert_relative_eq!(kw(solution.heat_duty), 84.0);
    }

    #[test]
    fn one_empty_side_uses_contact_formulas() {
        let input = ExchangerInput::new(
            Stream::from_working_units(360.0, 380.0, 1.0).unwrap(),
            Stream::from_working_units(420.0, 400.0, 1.0).unwrap(),
            single(373.0, 4.2, 2.0, 2260.0),
            Mixture::empty(),
            Schema::Mixing,
        )
        .with_heat_duty(Power::new::<kilowatt>(50.0));

        let solution = solve(&input);

        // The cold component boils at 373 K; the empty hot side has no W_h.
        assert_eq!(solution.contact_type, Some(ContactType::ColdBoiling));
        assert_eq!(solution.k_source(), "schema/contact");
        assert_relative_eq!(
            kw_per_k(solution.conductance),
            50.0 / 47.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(sigma(&solution), 0.0);
    }
}
