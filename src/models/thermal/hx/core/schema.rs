//! Flow-contact topologies and their closed-form `Q`/`K` relations.

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::trace;

use super::{
    ConductanceSource,
    numeric::{ln_ratio, nonzero},
    state::State,
};

/// Flow-contact topology of the exchanger.
///
/// "Mixing" means the stream is fully mixed inside the exchanger and leaves
/// at a uniform temperature. "Displacement" means plug flow with a
/// temperature profile along the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Schema {
    /// Both streams mixing (`Schema1`).
    #[default]
    Mixing,
    /// Co-current displacement (`Schema2`).
    ParallelFlow,
    /// Cold stream mixing, hot stream displacement (`Schema3`).
    ColdMixing,
    /// Hot stream mixing, cold stream displacement (`Schema4`).
    HotMixing,
    /// Counter-current displacement (`Schema5`).
    CounterFlow,
}

/// An identifier that does not name a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown schema identifier: {0:?}")]
pub struct ParseSchemaError(pub String);

impl Schema {
    /// All topologies, in identifier order.
    pub const ALL: [Self; 5] = [
        Self::Mixing,
        Self::ParallelFlow,
        Self::ColdMixing,
        Self::HotMixing,
        Self::CounterFlow,
    ];

    /// Stable identifier, `"Schema1"` through `"Schema5"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Mixing => "Schema1",
            Self::ParallelFlow => "Schema2",
            Self::ColdMixing => "Schema3",
            Self::HotMixing => "Schema4",
            Self::CounterFlow => "Schema5",
        }
    }

    /// Fills whichever of `Q` and `K` is missing, then evaluates the
    /// sensible entropy production if both streams are fully known.
    pub(super) fn solve(self, state: State) -> State {
        let state = match (state.heat_duty, state.conductance) {
            (Some(q), None) => {
                let k = self.conductance(&state, q);
                if k.is_none() {
                    trace!(schema = %self, q, "conductance relation undefined, step skipped");
                }
                state.with_conductance(k, ConductanceSource::Schema)
            }
            (None, Some(k)) => {
                let q = self.duty(&state, k);
                if q.is_none() {
                    trace!(schema = %self, k, "duty relation undefined, step skipped");
                }
                state.with_heat_duty(q)
            }
            _ => state,
        };

        match state.sensible_entropy_production() {
            Some(sigma) => State {
                entropy_production: Some(sigma),
                ..state
            },
            None => state,
        }
    }

    /// `K` that transfers `q` under this topology.
    pub(super) fn conductance(self, state: &State, q: f64) -> Option<f64> {
        let (cold, hot) = (&state.cold, &state.hot);
        match self {
            Self::Mixing => Some(q / nonzero(hot.outlet? - cold.outlet?)?),
            Self::ParallelFlow => {
                let b = nonzero(state.b?)?;
                let dt_in = hot.inlet? - cold.inlet?;
                Some(ln_ratio(dt_in, dt_in - b * q)? / b)
            }
            Self::ColdMixing => {
                let w_h = hot.capacitance_rate?;
                let hot_inlet = hot.inlet?;
                Some(
                    w_h * ln_ratio(
                        hot_inlet - cold.outlet?,
                        hot_inlet - hot.outlet? - q / w_h,
                    )?,
                )
            }
            Self::HotMixing => {
                let w_c = cold.capacitance_rate?;
                let approach = hot.outlet? - cold.inlet?;
                Some(w_c * ln_ratio(approach, approach - q / w_c)?)
            }
            Self::CounterFlow => {
                let a = state.a?;
                if a == 0.0 {
                    let w_c = cold.capacitance_rate?;
                    Some(q / nonzero(hot.inlet? - cold.inlet? - q / w_c)?)
                } else {
                    let approach = hot.outlet? - cold.inlet?;
                    Some(ln_ratio(approach + a * q, approach)? / a)
                }
            }
        }
    }

    /// `Q` transferred by conductance `k` under this topology.
    ///
    /// For [`Schema::ColdMixing`] this is the established reference relation
    /// `Q = W_c (Th_in - Tc_out)(1 - exp(-K/W_h))`. It is not the algebraic
    /// inverse of [`Schema::conductance`] for that topology, so a round trip
    /// does not return the original duty.
    pub(super) fn duty(self, state: &State, k: f64) -> Option<f64> {
        let (cold, hot) = (&state.cold, &state.hot);
        match self {
            Self::Mixing => Some(k * nonzero(hot.outlet? - cold.outlet?)?),
            Self::ParallelFlow => {
                let b = nonzero(state.b?)?;
                let dt_in = hot.inlet? - cold.inlet?;
                Some(dt_in / b * (1.0 - (-k * b).exp()))
            }
            Self::ColdMixing => {
                let w_c = cold.capacitance_rate?;
                let w_h = hot.capacitance_rate?;
                Some(w_c * (hot.inlet? - cold.outlet?) * (1.0 - (-k / w_h).exp()))
            }
            Self::HotMixing => {
                let w_c = cold.capacitance_rate?;
                let approach = hot.outlet? - cold.inlet?;
                Some(w_c * approach * (1.0 - (-k / w_c).exp()))
            }
            Self::CounterFlow => {
                let a = state.a?;
                if a == 0.0 {
                    let w_c = cold.capacitance_rate?;
                    Some(k * (hot.inlet? - cold.inlet?) / (1.0 + k / w_c))
                } else {
                    let approach = hot.outlet? - cold.inlet?;
                    Some(approach * ((k * a).exp() - 1.0) / a)
                }
            }
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Schema {
    type Err = ParseSchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::ALL
            .into_iter()
            .find(|schema| schema.id() == id)
            .ok_or_else(|| ParseSchemaError(s.to_owned()))
    }
}
