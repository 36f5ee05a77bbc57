//! Scratch record threaded through one evaluation.
//!
//! Every stage takes a [`State`] by value and returns the next one. Values
//! are kept in the engine's working units (K, kg/s, kW, kW/K) so the
//! closed-form relations read like their textbook versions.

use crate::support::{hx::CapacitanceRate, mixture::Mixture};
use uom::si::{
    mass_rate::kilogram_per_second, power::kilowatt, thermal_conductance::kilowatt_per_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{
    ConductanceSource, ContactType, ExchangerInput, SolveConfig, Stream,
    numeric::{ln_ratio, nonzero, positive, round_to},
};

/// One stream reduced to plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Side {
    pub(super) inlet: Option<f64>,
    pub(super) outlet: Option<f64>,
    pub(super) mass_rate: f64,
    pub(super) capacitance_rate: Option<f64>,
}

impl Side {
    /// Reduces a stream, evaluating its capacitance rate at the inlet.
    ///
    /// A stream with no inlet temperature has no reference point for the
    /// mixture's specific heat and therefore no capacitance rate.
    fn new(stream: &Stream, mixture: &Mixture) -> Self {
        let capacitance_rate = stream.inlet_temperature().and_then(|inlet| {
            CapacitanceRate::from_mass_rate_and_specific_heat(
                stream.mass_rate(),
                mixture.effective_specific_heat(inlet),
            )
            .ok()
            .map(|w| w.kilowatts_per_kelvin())
        });

        Self {
            inlet: stream.inlet_temperature().map(|t| t.get::<kelvin>()),
            outlet: stream.outlet_temperature().map(|t| t.get::<kelvin>()),
            mass_rate: stream.mass_rate().get::<kilogram_per_second>(),
            capacitance_rate,
        }
    }

    pub(super) fn is_flowing(&self) -> bool {
        self.mass_rate > 0.0
    }

    /// Sensible entropy change `W * ln(outlet / inlet)` against `outlet`.
    pub(super) fn sensible_entropy_to(&self, outlet: f64) -> Option<f64> {
        Some(self.capacitance_rate? * ln_ratio(outlet, self.inlet?)?)
    }

    /// Mean of inlet and outlet, or the inlet alone.
    pub(super) fn mean_temperature(&self) -> Option<f64> {
        let inlet = self.inlet?;
        Some(self.outlet.map_or(inlet, |outlet| 0.5 * (inlet + outlet)))
    }
}

/// Accumulated knowns of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct State {
    pub(super) cold: Side,
    pub(super) hot: Side,
    pub(super) heat_duty: Option<f64>,
    pub(super) heat_duty_computed: bool,
    pub(super) hot_outlet_computed: bool,
    pub(super) conductance: Option<f64>,
    pub(super) conductance_source: Option<ConductanceSource>,
    pub(super) entropy_production: Option<f64>,
    pub(super) contact: Option<ContactType>,
    /// `(W_c - W_h) / (W_h * W_c)`
    pub(super) a: Option<f64>,
    /// `(W_c + W_h) / (W_h * W_c)`
    pub(super) b: Option<f64>,
}

impl State {
    /// Seeds a state from the caller's input and forms both capacitance rates.
    pub(super) fn new(input: &ExchangerInput) -> Self {
        let conductance = input
            .conductance
            .map(|k| k.get::<kilowatt_per_kelvin>())
            .and_then(nonzero);

        Self {
            cold: Side::new(&input.cold, &input.cold_mixture),
            hot: Side::new(&input.hot, &input.hot_mixture),
            heat_duty: input
                .heat_duty
                .map(|q| q.get::<kilowatt>())
                .and_then(nonzero),
            heat_duty_computed: false,
            hot_outlet_computed: false,
            conductance,
            conductance_source: conductance.map(|_| ConductanceSource::Given),
            entropy_production: None,
            contact: None,
            a: None,
            b: None,
        }
    }

    /// Runs every stage that precedes the regime dispatch.
    pub(super) fn prepare(input: &ExchangerInput, config: &SolveConfig) -> Self {
        Self::new(input)
            .infer_heat_duty(config)
            .infer_hot_outlet(config)
            .with_auxiliary_coefficients()
    }

    /// Infers `Q = (Th_in - Th_out) * W_c` when no duty was given.
    ///
    /// The hot-side temperature drop is multiplied by the *cold-side*
    /// capacitance rate. Both balances are assumed to agree at steady state
    /// and no reconciliation is attempted.
    pub(super) fn infer_heat_duty(self, config: &SolveConfig) -> Self {
        if self.heat_duty.is_some() {
            return self;
        }

        let inferred = || -> Option<f64> {
            self.cold.inlet?;
            self.cold.outlet?;
            if !self.cold.is_flowing() {
                return None;
            }
            let drop = self.hot.inlet? - self.hot.outlet?;
            nonzero(round_to(drop * self.cold.capacitance_rate?, config.rounding_decimals))
        };

        match inferred() {
            Some(q) => Self {
                heat_duty: Some(q),
                heat_duty_computed: true,
                ..self
            },
            None => self,
        }
    }

    /// Infers `Th_out = Th_in - Q / W_h` when the hot outlet is missing.
    pub(super) fn infer_hot_outlet(self, config: &SolveConfig) -> Self {
        if self.hot.outlet.is_some() || !self.hot.is_flowing() {
            return self;
        }

        let inferred = || -> Option<f64> {
            let outlet = self.hot.inlet? - self.heat_duty? / self.hot.capacitance_rate?;
            positive(round_to(outlet, config.rounding_decimals))
        };

        match inferred() {
            Some(outlet) => Self {
                hot: Side {
                    outlet: Some(outlet),
                    ..self.hot
                },
                hot_outlet_computed: true,
                ..self
            },
            None => self,
        }
    }

    /// Derives `A` and `B` when both capacitance rates exist.
    pub(super) fn with_auxiliary_coefficients(self) -> Self {
        let (Some(w_c), Some(w_h)) = (self.cold.capacitance_rate, self.hot.capacitance_rate) else {
            return self;
        };
        let product = w_h * w_c;
        Self {
            a: Some((w_c - w_h) / product),
            b: Some((w_c + w_h) / product),
            ..self
        }
    }

    /// Sets `K` from `source` unless it is already known.
    pub(super) fn with_conductance(self, k: Option<f64>, source: ConductanceSource) -> Self {
        match (self.conductance, k.and_then(nonzero)) {
            (None, Some(k)) => Self {
                conductance: Some(k),
                conductance_source: Some(source),
                ..self
            },
            _ => self,
        }
    }

    /// Sets `Q` unless it is already known, marking it as computed.
    pub(super) fn with_heat_duty(self, q: Option<f64>) -> Self {
        match (self.heat_duty, q.and_then(nonzero)) {
            (None, Some(q)) => Self {
                heat_duty: Some(q),
                heat_duty_computed: true,
                ..self
            },
            _ => self,
        }
    }

    /// Sensible entropy production of both streams against their known
    /// outlets: `W_h ln(Th_out/Th_in) + W_c ln(Tc_out/Tc_in)`.
    pub(super) fn sensible_entropy_production(&self) -> Option<f64> {
        let hot = self.hot.sensible_entropy_to(self.hot.outlet?)?;
        let cold = self.cold.sensible_entropy_to(self.cold.outlet?)?;
        Some(hot + cold)
    }

    /// Cold outlet, or `Tc_in + Q / W_c` if it is unknown.
    pub(super) fn effective_cold_outlet(&self) -> Option<f64> {
        self.cold
            .outlet
            .or_else(|| Some(self.cold.inlet? + self.heat_duty? / self.cold.capacitance_rate?))
    }

    /// Hot outlet, or `Th_in - Q / W_h` if it is unknown.
    pub(super) fn effective_hot_outlet(&self) -> Option<f64> {
        self.hot
            .outlet
            .or_else(|| Some(self.hot.inlet? - self.heat_duty? / self.hot.capacitance_rate?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Power, power::kilowatt};

    use crate::models::thermal::hx::core::{Schema, test_support::water_like_input};

    #[test]
    fn capacitance_rates_use_inlet_temperature() {
        let state = State::new(&water_like_input(Schema::Mixing));

        assert_relative_eq!(state.cold.capacitance_rate.unwrap(), 4.2, epsilon = 1e-9);
        assert_relative_eq!(state.hot.capacitance_rate.unwrap(), 4.2, epsilon = 1e-9);
        assert_eq!(state.heat_duty, None);
    }

    #[test]
    fn heat_duty_uses_cold_side_capacitance_rate() {
        let mut input = water_like_input(Schema::Mixing);
        input.hot = Stream::from_working_units(350.0, 330.0, 2.0).unwrap();

        let state = State::prepare(&input, &SolveConfig::default());

        // Hot side carries 8.4 kW/K but the duty is still 20 K * 4.2 kW/K.
        assert_relative_eq!(state.hot.capacitance_rate.unwrap(), 8.4, epsilon = 1e-9);
        assert_relative_eq!(state.heat_duty.unwrap(), 84.0, epsilon = 1e-9);
        assert!(state.heat_duty_computed);
    }

    #[test]
    fn given_heat_duty_is_not_overwritten() {
        let input = water_like_input(Schema::Mixing).with_heat_duty(Power::new::<kilowatt>(50.0));
        let state = State::prepare(&input, &SolveConfig::default());

        assert_relative_eq!(state.heat_duty.unwrap(), 50.0, epsilon = 1e-9);
        assert!(!state.heat_duty_computed);
    }

    #[test]
    fn hot_outlet_follows_from_heat_duty() {
        let mut input =
            water_like_input(Schema::Mixing).with_heat_duty(Power::new::<kilowatt>(42.0));
        input.hot = input.hot.without_outlet();

        let state = State::prepare(&input, &SolveConfig::default());

        assert_relative_eq!(state.hot.outlet.unwrap(), 340.0, epsilon = 1e-9);
        assert!(state.hot_outlet_computed);
    }

    #[test]
    fn idle_hot_stream_keeps_outlet_unknown() {
        let mut input =
            water_like_input(Schema::Mixing).with_heat_duty(Power::new::<kilowatt>(42.0));
        input.hot = Stream::from_working_units(350.0, 0.0, 0.0).unwrap();

        let state = State::prepare(&input, &SolveConfig::default());

        assert_eq!(state.hot.capacitance_rate, None);
        assert_eq!(state.hot.outlet, None);
        assert_eq!(state.a, None);
    }

    #[test]
    fn auxiliary_coefficients() {
        let mut input = water_like_input(Schema::Mixing);
        input.hot = Stream::from_working_units(350.0, 330.0, 2.0).unwrap();

        let state = State::prepare(&input, &SolveConfig::default());

        assert_relative_eq!(state.a.unwrap(), -4.2 / 35.28, epsilon = 1e-9);
        assert_relative_eq!(state.b.unwrap(), 12.6 / 35.28, epsilon = 1e-9);
    }

    #[test]
    fn known_conductance_is_kept() {
        let state = State::new(&water_like_input(Schema::Mixing))
            .with_conductance(Some(2.0), ConductanceSource::Lmtd)
            .with_conductance(Some(3.0), ConductanceSource::MeanDelta);

        assert_eq!(state.conductance, Some(2.0));
        assert_eq!(state.conductance_source, Some(ConductanceSource::Lmtd));
    }
}
