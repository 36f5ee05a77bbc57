mod stream;

pub use stream::Stream;

use crate::support::mixture::Mixture;
use uom::si::f64::{Power, ThermalConductance};

use super::{Schema, SolveConfig};

/// Everything the caller knows about one exchanger evaluation.
///
/// Any subset of the stream values may be missing. The heat duty and the
/// conductance are optional hints: a hint that is absent (or zero) is
/// something the solver will try to derive.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangerInput {
    /// Stream being heated.
    pub cold: Stream,

    /// Stream being cooled.
    pub hot: Stream,

    /// Composition of the cold stream.
    pub cold_mixture: Mixture,

    /// Composition of the hot stream.
    pub hot_mixture: Mixture,

    /// Known heat duty `Q`, if any.
    pub heat_duty: Option<Power>,

    /// Known aggregate heat transfer coefficient `K`, if any.
    pub conductance: Option<ThermalConductance>,

    /// Flow-contact topology.
    pub schema: Schema,
}

impl ExchangerInput {
    /// Creates an input with no heat duty or conductance hint.
    #[must_use]
    pub fn new(
        cold: Stream,
        hot: Stream,
        cold_mixture: Mixture,
        hot_mixture: Mixture,
        schema: Schema,
    ) -> Self {
        Self {
            cold,
            hot,
            cold_mixture,
            hot_mixture,
            heat_duty: None,
            conductance: None,
            schema,
        }
    }

    /// Sets the known heat duty.
    #[must_use]
    pub fn with_heat_duty(self, heat_duty: Power) -> Self {
        Self {
            heat_duty: Some(heat_duty),
            ..self
        }
    }

    /// Sets the known aggregate heat transfer coefficient.
    #[must_use]
    pub fn with_conductance(self, conductance: ThermalConductance) -> Self {
        Self {
            conductance: Some(conductance),
            ..self
        }
    }

    /// Returns a copy of this input with a different topology.
    #[must_use]
    pub fn with_schema(&self, schema: Schema) -> Self {
        Self {
            schema,
            ..self.clone()
        }
    }

    /// Returns `true` when a full entropy and coefficient evaluation is
    /// meaningful: both streams have inlet, outlet and a flow rate, and both
    /// mixtures have shares adding up to one within the configured tolerance.
    ///
    /// The solver runs regardless; this only tells a caller whether the
    /// result is worth showing.
    #[must_use]
    pub fn is_ready_for_sigma_k(&self, config: &SolveConfig) -> bool {
        self.cold.is_fully_specified()
            && self.hot.is_fully_specified()
            && self.cold_mixture.is_valid(config.share_tolerance)
            && self.hot_mixture.is_valid(config.share_tolerance)
    }
}
