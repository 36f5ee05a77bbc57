use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive, UnitInterval},
    units::LatentHeat,
};
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{SpecificHeatCapacity, ThermodynamicTemperature},
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Phase-change properties of a pure substance.
///
/// These are the values the component database resolves a name to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentProperties {
    /// Temperature at which the substance changes phase.
    pub threshold_temperature: ThermodynamicTemperature,
    /// Specific heat below the threshold.
    pub liquid_specific_heat: SpecificHeatCapacity,
    /// Specific heat at or above the threshold.
    pub vapor_specific_heat: SpecificHeatCapacity,
    /// Heat absorbed or released by the phase change.
    pub latent_heat: LatentHeat,
}

impl ComponentProperties {
    /// Builds properties from values in the engine's working units:
    /// K, kJ/(kg·K), kJ/(kg·K), kJ/kg.
    #[must_use]
    pub fn in_working_units(
        threshold_kelvin: f64,
        liquid_kj_per_kg_k: f64,
        vapor_kj_per_kg_k: f64,
        latent_kj_per_kg: f64,
    ) -> Self {
        Self {
            threshold_temperature: ThermodynamicTemperature::new::<kelvin>(threshold_kelvin),
            liquid_specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(
                liquid_kj_per_kg_k,
            ),
            vapor_specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(
                vapor_kj_per_kg_k,
            ),
            latent_heat: LatentHeat::new::<kilojoule_per_kilogram>(latent_kj_per_kg),
        }
    }
}

/// One substance's contribution to a [`Mixture`](super::Mixture).
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    share: Constrained<f64, UnitInterval>,
    properties: ComponentProperties,
}

impl Component {
    /// Creates a component from its display name, share, and properties.
    ///
    /// The name is for display only and never enters a calculation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the share lies outside `[0, 1]`, the threshold
    /// temperature is not above absolute zero, or either specific heat or the
    /// latent heat is negative.
    pub fn new(
        name: impl Into<String>,
        share: f64,
        properties: ComponentProperties,
    ) -> ConstraintResult<Self> {
        StrictlyPositive::new(properties.threshold_temperature.get::<kelvin>())?;
        NonNegative::new(properties.liquid_specific_heat)?;
        NonNegative::new(properties.vapor_specific_heat)?;
        NonNegative::new(properties.latent_heat)?;

        Ok(Self {
            name: name.into(),
            share: UnitInterval::new(share)?,
            properties,
        })
    }

    /// Returns a copy of this component with a different share.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the share lies outside `[0, 1]`.
    pub fn with_share(&self, share: f64) -> ConstraintResult<Self> {
        Ok(Self {
            share: UnitInterval::new(share)?,
            ..self.clone()
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass or mole fraction of this component in its mixture.
    #[must_use]
    pub fn share(&self) -> f64 {
        self.share.into_inner()
    }

    /// Phase-change properties.
    #[must_use]
    pub fn properties(&self) -> &ComponentProperties {
        &self.properties
    }

    /// Applicable specific heat at `temperature`.
    #[must_use]
    pub fn specific_heat_at(&self, temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
        if temperature < self.properties.threshold_temperature {
            self.properties.liquid_specific_heat
        } else {
            self.properties.vapor_specific_heat
        }
    }

    /// Threshold temperature in K.
    pub(crate) fn threshold_kelvin(&self) -> f64 {
        self.properties.threshold_temperature.get::<kelvin>()
    }

    /// Latent heat in kJ/kg.
    pub(crate) fn latent_heat_kj_per_kg(&self) -> f64 {
        self.properties.latent_heat.get::<kilojoule_per_kilogram>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn rejects_out_of_range_share() {
        let props = ComponentProperties::in_working_units(373.0, 4.2, 2.0, 2260.0);

        assert_eq!(
            Component::new("water", 1.5, props).unwrap_err(),
            ConstraintError::AboveMaximum
        );
        assert_eq!(
            Component::new("water", -0.1, props).unwrap_err(),
            ConstraintError::BelowMinimum
        );
    }

    #[test]
    fn rejects_non_physical_properties() {
        let at_absolute_zero = ComponentProperties::in_working_units(0.0, 4.2, 2.0, 2260.0);
        let negative_latent = ComponentProperties::in_working_units(373.0, 4.2, 2.0, -1.0);

        assert_eq!(
            Component::new("x", 1.0, at_absolute_zero).unwrap_err(),
            ConstraintError::Zero
        );
        assert_eq!(
            Component::new("x", 1.0, negative_latent).unwrap_err(),
            ConstraintError::Negative
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn with_share_keeps_properties() {
        let props = ComponentProperties::in_working_units(351.5, 2.44, 1.42, 846.0);
        let ethanol = Component::new("ethanol", 1.0, props).unwrap();

        let diluted = ethanol.with_share(0.2).unwrap();

        assert_eq!(diluted.share(), 0.2);
        assert_eq!(diluted.name(), "ethanol");
        assert_eq!(diluted.properties(), &props);
        assert!(ethanol.with_share(1.2).is_err());
    }
}
