//! Result record for one exchanger evaluation.

use std::fmt;

use crate::support::units::EntropyRate;
use uom::si::f64::{Power, ThermalConductance, ThermodynamicTemperature};

use super::ContactType;

/// How the aggregate heat transfer coefficient `K` was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConductanceSource {
    /// Supplied by the caller.
    Given,
    /// Closed-form relation of the selected topology.
    Schema,
    /// Phase-contact formula of the multi-component regime.
    Contact,
    /// Heat duty over the difference of mean stream temperatures.
    MeanDelta,
    /// Heat duty over the log-mean temperature difference.
    Lmtd,
}

impl ConductanceSource {
    /// Short identifier used in tabular output.
    ///
    /// Both regime formulas report as `"schema/contact"`; the variant tells
    /// them apart.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::Schema | Self::Contact => "schema/contact",
            Self::MeanDelta => "mean_delta",
            Self::Lmtd => "lmtd",
        }
    }
}

impl fmt::Display for ConductanceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values derived by one evaluation.
///
/// `heat_duty` and `hot_outlet_temperature` are only present when the solver
/// computed them; a value the caller supplied is never echoed back.
/// Entropy production and conductance default to zero when no formula
/// applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Heat duty, if it was inferred.
    pub heat_duty: Option<Power>,

    /// Hot outlet temperature, if it was inferred.
    pub hot_outlet_temperature: Option<ThermodynamicTemperature>,

    /// Entropy production `σ`.
    pub entropy_production: EntropyRate,

    /// Aggregate heat transfer coefficient `K`.
    pub conductance: ThermalConductance,

    /// Provenance of `conductance`, if it was set.
    pub conductance_source: Option<ConductanceSource>,

    /// Phase-contact classification, if the multi-component regime ran.
    pub contact_type: Option<ContactType>,

    /// Cold stream capacitance rate, zero if it could not be formed.
    pub cold_capacitance_rate: ThermalConductance,

    /// Hot stream capacitance rate, zero if it could not be formed.
    pub hot_capacitance_rate: ThermalConductance,
}

impl Solution {
    /// Conductance provenance as a short string, empty if unset.
    #[must_use]
    pub fn k_source(&self) -> &'static str {
        self.conductance_source.map_or("", ConductanceSource::as_str)
    }

    /// Contact type code, empty if the multi-component regime did not run.
    #[must_use]
    pub fn contact(&self) -> &'static str {
        self.contact_type.map_or("", ContactType::code)
    }
}
