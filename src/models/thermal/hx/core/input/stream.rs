use crate::support::constraint::{ConstraintResult, NonNegative};
use uom::si::{
    f64::{MassRate, Pressure, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::kelvin,
};

/// One side of the exchanger as entered by the caller.
///
/// Temperatures are optional. A temperature at or below absolute zero is
/// treated as not given, so callers holding raw form values can pass `0.0`
/// for "unknown". A zero mass rate is allowed and simply leaves the stream
/// without a capacitance rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stream {
    inlet_temperature: Option<ThermodynamicTemperature>,
    outlet_temperature: Option<ThermodynamicTemperature>,
    mass_rate: MassRate,
    pressure: Option<Pressure>,
}

impl Stream {
    /// Creates a stream.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the mass rate is negative or not a number.
    pub fn new(
        inlet_temperature: Option<ThermodynamicTemperature>,
        outlet_temperature: Option<ThermodynamicTemperature>,
        mass_rate: MassRate,
    ) -> ConstraintResult<Self> {
        let mass_rate = NonNegative::new(mass_rate)?.into_inner();
        Ok(Self {
            inlet_temperature: inlet_temperature.filter(is_known),
            outlet_temperature: outlet_temperature.filter(is_known),
            mass_rate,
            pressure: None,
        })
    }

    /// Creates a stream from kelvin and kg/s, with `0.0` meaning "unknown"
    /// for either temperature.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the mass rate is negative or not a number.
    pub fn from_working_units(
        inlet_kelvin: f64,
        outlet_kelvin: f64,
        mass_rate_kg_per_s: f64,
    ) -> ConstraintResult<Self> {
        Self::new(
            Some(ThermodynamicTemperature::new::<kelvin>(inlet_kelvin)),
            Some(ThermodynamicTemperature::new::<kelvin>(outlet_kelvin)),
            MassRate::new::<kilogram_per_second>(mass_rate_kg_per_s),
        )
    }

    /// Attaches the stream pressure.
    ///
    /// Pressure is carried for display and export; the solver ignores it.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self {
            pressure: Some(pressure),
            ..self
        }
    }

    /// Returns the same stream with its outlet temperature cleared.
    #[must_use]
    pub fn without_outlet(self) -> Self {
        Self {
            outlet_temperature: None,
            ..self
        }
    }

    /// Inlet temperature, if known.
    #[must_use]
    pub fn inlet_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.inlet_temperature
    }

    /// Outlet temperature, if known.
    #[must_use]
    pub fn outlet_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.outlet_temperature
    }

    /// Mass flow rate.
    #[must_use]
    pub fn mass_rate(&self) -> MassRate {
        self.mass_rate
    }

    /// Pressure, if given.
    #[must_use]
    pub fn pressure(&self) -> Option<Pressure> {
        self.pressure
    }

    /// Returns `true` if both temperatures and a positive flow rate are known.
    #[must_use]
    pub fn is_fully_specified(&self) -> bool {
        self.inlet_temperature.is_some()
            && self.outlet_temperature.is_some()
            && self.mass_rate.get::<kilogram_per_second>() > 0.0
    }
}

fn is_known(temperature: &ThermodynamicTemperature) -> bool {
    temperature.get::<kelvin>() > 0.0
}
