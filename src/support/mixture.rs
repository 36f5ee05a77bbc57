//! Multi-component stream mixtures and their effective specific heat.
//!
//! A [`Mixture`] is an ordered list of [`Component`]s. Each component carries
//! its share of the stream, the temperature at which it changes phase, one
//! specific heat for each side of that threshold, and the latent heat of the
//! phase change.
//!
//! The mixture's effective specific heat is evaluated at a single reference
//! temperature (the exchanger models use the stream's inlet temperature):
//!
//! ```text
//! c_mix(T) = Σ share_i * (c_liquid_i if T < T_threshold_i else c_vapor_i)
//! ```
//!
//! This is a point evaluation, not an integral over the stream's temperature
//! span, so it is only approximate when a stream heats or cools over a wide
//! range.
//!
//! Shares are expected to add up to one. [`Mixture::is_valid`] checks that,
//! but nothing here enforces it: an invalid mixture still evaluates, it just
//! does not mean much.
//!
//! Property rows can be pre-populated from the fixed [`database`].

mod component;
pub mod database;

pub use component::{Component, ComponentProperties};

use uom::{
    ConstZero,
    si::f64::{SpecificHeatCapacity, ThermodynamicTemperature},
};

/// Default tolerance on `|Σ share - 1|` for a mixture to count as valid.
pub const SHARE_TOLERANCE: f64 = 1e-3;

/// An ordered collection of components making up one stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mixture {
    components: Vec<Component>,
}

impl Mixture {
    /// Creates a mixture from its components.
    #[must_use]
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Creates a mixture with no components.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the components in their original order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the mixture has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of all component shares.
    #[must_use]
    pub fn share_sum(&self) -> f64 {
        self.components.iter().map(Component::share).sum()
    }

    /// Returns `true` if the mixture is non-empty and its shares add up to one
    /// within `tolerance`.
    #[must_use]
    pub fn is_valid(&self, tolerance: f64) -> bool {
        !self.is_empty() && (self.share_sum() - 1.0).abs() <= tolerance
    }

    /// Effective specific heat of the mixture at `reference_temperature`.
    ///
    /// Each component contributes its liquid specific heat when the reference
    /// temperature is strictly below its threshold and its vapor specific heat
    /// otherwise, weighted by its share. An empty mixture yields zero.
    #[must_use]
    pub fn effective_specific_heat(
        &self,
        reference_temperature: ThermodynamicTemperature,
    ) -> SpecificHeatCapacity {
        self.components
            .iter()
            .fold(SpecificHeatCapacity::ZERO, |total, component| {
                total + component.specific_heat_at(reference_temperature) * component.share()
            })
    }
}

impl FromIterator<Component> for Mixture {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        specific_heat_capacity::kilojoule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
    };

    use super::*;
    use crate::support::constraint::ConstraintResult;

    fn kelvin_temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    fn water(share: f64) -> ConstraintResult<Component> {
        Component::new(
            "water",
            share,
            ComponentProperties::in_working_units(373.0, 4.2, 2.0, 2260.0),
        )
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn single_component_switches_at_threshold() -> ConstraintResult<()> {
        let mixture = Mixture::new(vec![water(1.0)?]);

        let below = mixture.effective_specific_heat(kelvin_temp(372.9));
        let at = mixture.effective_specific_heat(kelvin_temp(373.0));
        let above = mixture.effective_specific_heat(kelvin_temp(400.0));

        assert_eq!(below.get::<kilojoule_per_kilogram_kelvin>(), 4.2);
        assert_eq!(at.get::<kilojoule_per_kilogram_kelvin>(), 2.0);
        assert_eq!(above.get::<kilojoule_per_kilogram_kelvin>(), 2.0);
        Ok(())
    }

    #[test]
    fn weights_by_share() -> ConstraintResult<()> {
        let ethanol = Component::new(
            "ethanol",
            0.25,
            ComponentProperties::in_working_units(351.5, 2.44, 1.42, 846.0),
        )?;
        let mixture = Mixture::new(vec![water(0.75)?, ethanol]);

        // 360 K sits between the two thresholds: water is liquid, ethanol vapor.
        let c = mixture.effective_specific_heat(kelvin_temp(360.0));

        assert_relative_eq!(
            c.get::<kilojoule_per_kilogram_kelvin>(),
            0.75 * 4.2 + 0.25 * 1.42,
            epsilon = 1e-12
        );
        Ok(())
    }

    #[test]
    fn empty_mixture_has_zero_specific_heat() {
        let mixture = Mixture::empty();

        let c = mixture.effective_specific_heat(kelvin_temp(300.0));

        assert_eq!(c, SpecificHeatCapacity::ZERO);
        assert!(!mixture.is_valid(SHARE_TOLERANCE));
    }

    #[test]
    fn validity_uses_share_tolerance() -> ConstraintResult<()> {
        let close = Mixture::new(vec![water(0.6)?, water(0.3995)?]);
        let short = Mixture::new(vec![water(0.6)?, water(0.39)?]);

        assert!(close.is_valid(SHARE_TOLERANCE));
        assert!(!short.is_valid(SHARE_TOLERANCE));
        assert_relative_eq!(short.share_sum(), 0.99, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn collects_from_iterator() -> ConstraintResult<()> {
        let mixture: Mixture = [0.5, 0.5].into_iter().map(water).collect::<Result<_, _>>()?;

        assert_eq!(mixture.len(), 2);
        assert!(mixture.is_valid(SHARE_TOLERANCE));
        Ok(())
    }
}
