//! Phase-contact classification for multi-component streams.
//!
//! A component "crosses" when its threshold lies strictly inside its stream's
//! temperature span. Crossing components exchange latent heat at their
//! threshold, so they enter the entropy balance as `m * share * r / T_b`
//! rather than through the stream's capacitance rate.

use crate::support::mixture::Mixture;
use tracing::debug;

use super::{
    ConductanceSource,
    numeric::{ln_ratio, nonzero, positive},
    state::State,
};

/// Which sides of the exchanger change phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    /// Neither side changes phase (`dd`).
    BothSensible,
    /// Cold side boils, hot side stays sensible (`db`).
    ColdBoiling,
    /// Cold side boils and hot side condenses (`cb`).
    BoilingCondensing,
    /// Hot side condenses, cold side stays sensible (`cd`).
    HotCondensing,
}

impl ContactType {
    fn classify(cold_boiling: bool, hot_condensing: bool) -> Self {
        match (cold_boiling, hot_condensing) {
            (false, false) => Self::BothSensible,
            (true, false) => Self::ColdBoiling,
            (true, true) => Self::BoilingCondensing,
            (false, true) => Self::HotCondensing,
        }
    }

    /// Two-letter code used in tabular output.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::BothSensible => "dd",
            Self::ColdBoiling => "db",
            Self::BoilingCondensing => "cb",
            Self::HotCondensing => "cd",
        }
    }
}

/// Latent-heat summary of one stream's crossing components.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Crossing {
    /// `Σ m * share * r / T_b`, kW/K.
    latent_entropy: f64,
    /// Mean threshold of the crossing components, if any cross.
    mean_threshold: Option<f64>,
}

impl Crossing {
    /// Collects components with `lower < T_b < upper`.
    ///
    /// An unknown bound means nothing crosses.
    fn of(mixture: &Mixture, lower: Option<f64>, upper: Option<f64>, mass_rate: f64) -> Self {
        let (Some(lower), Some(upper)) = (lower, upper) else {
            return Self {
                latent_entropy: 0.0,
                mean_threshold: None,
            };
        };

        let (latent_entropy, threshold_sum, count) = mixture
            .components()
            .iter()
            .filter(|c| lower < c.threshold_kelvin() && c.threshold_kelvin() < upper)
            .fold((0.0, 0.0, 0_u32), |(latent, sum, n), c| {
                let t_b = c.threshold_kelvin();
                (
                    latent + mass_rate * c.share() * c.latent_heat_kj_per_kg() / t_b,
                    sum + t_b,
                    n + 1,
                )
            });

        Self {
            latent_entropy,
            mean_threshold: (count > 0).then(|| threshold_sum / f64::from(count)),
        }
    }

    fn is_crossing(&self) -> bool {
        self.mean_threshold.is_some()
    }
}

/// Classifies the contact and evaluates its entropy production and `K`.
pub(super) fn solve(state: State, cold_mixture: &Mixture, hot_mixture: &Mixture) -> State {
    let cold_outlet = state.effective_cold_outlet();
    let hot_outlet = state.effective_hot_outlet();

    let boiling = Crossing::of(
        cold_mixture,
        state.cold.inlet,
        cold_outlet,
        state.cold.mass_rate,
    );
    let condensing = Crossing::of(hot_mixture, hot_outlet, state.hot.inlet, state.hot.mass_rate);
    let contact = ContactType::classify(boiling.is_crossing(), condensing.is_crossing());
    debug!(
        contact = contact.code(),
        cold_threshold = ?boiling.mean_threshold,
        hot_threshold = ?condensing.mean_threshold,
        "classified phase contact"
    );

    let (sigma, k) = match contact {
        ContactType::BothSensible => (
            cold_outlet.zip(hot_outlet).and_then(|(tc_out, th_out)| {
                let hot = state.hot.sensible_entropy_to(th_out)?;
                Some(hot + state.cold.sensible_entropy_to(tc_out)?)
            }),
            sensible_conductance(&state),
        ),
        ContactType::ColdBoiling => (
            hot_outlet
                .and_then(|th_out| state.hot.sensible_entropy_to(th_out))
                .map(|hot| boiling.latent_entropy + hot),
            boiling
                .mean_threshold
                .and_then(|t_b| latent_conductance(&state, state.hot.inlet? - t_b)),
        ),
        ContactType::BoilingCondensing => (
            Some(boiling.latent_entropy - condensing.latent_entropy),
            boiling
                .mean_threshold
                .zip(condensing.mean_threshold)
                .and_then(|(cold_t_b, hot_t_b)| latent_conductance(&state, hot_t_b - cold_t_b)),
        ),
        ContactType::HotCondensing => (
            cold_outlet
                .and_then(|tc_out| state.cold.sensible_entropy_to(tc_out))
                .map(|cold| cold - condensing.latent_entropy),
            condensing
                .mean_threshold
                .and_then(|t_b| latent_conductance(&state, t_b - state.cold.inlet?)),
        ),
    };

    State {
        contact: Some(contact),
        entropy_production: sigma.or(state.entropy_production),
        ..state
    }
    .with_conductance(k, ConductanceSource::Contact)
}

/// `K = ln(ΔT_out / ΔT_in) / A` with both outlets taken from the duty.
fn sensible_conductance(state: &State) -> Option<f64> {
    let q = state.heat_duty?;
    let hot_inlet = state.hot.inlet?;
    let cold_inlet = state.cold.inlet?;
    let hot_outlet = hot_inlet - q / state.hot.capacitance_rate?;
    let cold_outlet = cold_inlet + q / state.cold.capacitance_rate?;
    let a = nonzero(state.a?)?;
    let numerator = positive(hot_outlet - cold_outlet)?;
    Some(ln_ratio(numerator, nonzero(hot_inlet - cold_inlet)?)? / a)
}

/// `K = Q / ΔT` across a phase-change threshold.
fn latent_conductance(state: &State, difference: f64) -> Option<f64> {
    Some(state.heat_duty? / nonzero(difference)?)
}
