use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{MassRate, SpecificHeatCapacity, ThermalConductance},
    thermal_conductance::kilowatt_per_kelvin,
};

/// Capacitance rate (`m_dot` * `c`) of a stream in a heat exchanger.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a thermal-conductance quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass rate and an effective specific
    /// heat capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive, for example when
    /// the stream is idle or its mixture has no components.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_rate * specific_heat)
    }

    /// Returns the capacitance rate in kW/K.
    #[must_use]
    pub fn kilowatts_per_kelvin(&self) -> f64 {
        self.get::<kilowatt_per_kelvin>()
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
