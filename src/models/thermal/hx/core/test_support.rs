use crate::support::mixture::{Component, ComponentProperties, Mixture};

use super::{ExchangerInput, Schema, Stream};

/// Single component that stays liquid below 373 K with `c = 4.2` on both sides.
pub(super) fn water_like() -> Mixture {
    single(373.0, 4.2, 4.2, 0.0)
}

/// Single-component mixture with the given working-unit properties.
pub(super) fn single(threshold: f64, liquid: f64, vapor: f64, latent: f64) -> Mixture {
    Mixture::new(vec![component("pure", 1.0, threshold, liquid, vapor, latent)])
}

pub(super) fn component(
    name: &str,
    share: f64,
    threshold: f64,
    liquid: f64,
    vapor: f64,
    latent: f64,
) -> Component {
    Component::new(
        name,
        share,
        ComponentProperties::in_working_units(threshold, liquid, vapor, latent),
    )
    .unwrap()
}

/// Water (boils at 373 K) and ethanol (boils at 351.5 K), half each.
pub(super) fn water_ethanol() -> Mixture {
    Mixture::new(vec![
        component("water", 0.5, 373.0, 4.2, 2.0, 2260.0),
        component("ethanol", 0.5, 351.5, 2.44, 1.42, 846.0),
    ])
}

/// Cold 290 -> 300 K and hot 350 -> 330 K, both at 1 kg/s of a water-like
/// fluid, so `W_c = W_h = 4.2 kW/K` and `Q = 84 kW`.
pub(super) fn water_like_input(schema: Schema) -> ExchangerInput {
    ExchangerInput::new(
        Stream::from_working_units(290.0, 300.0, 1.0).unwrap(),
        Stream::from_working_units(350.0, 330.0, 1.0).unwrap(),
        water_like(),
        water_like(),
        schema,
    )
}
