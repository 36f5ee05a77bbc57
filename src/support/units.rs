//! Named quantities that [`uom`] does not spell out.
//!
//! The heat exchanger engine needs two quantities whose dimensions exist in
//! [`uom`] under less descriptive names:
//!
//! - [`LatentHeat`]: energy per unit mass released or absorbed at a phase
//!   change (J/kg in SI, the dimension of `AvailableEnergy`).
//! - [`EntropyRate`]: entropy produced per unit time (W/K in SI, the
//!   dimension of `ThermalConductance`).
//!
//! Both are plain aliases, so the unit modules of the matching [`uom`]
//! quantity are used to construct and read them:
//!
//! ```
//! use twine_mixture_hx::support::units::LatentHeat;
//! use uom::si::available_energy::kilojoule_per_kilogram;
//!
//! let r = LatentHeat::new::<kilojoule_per_kilogram>(2260.0);
//! assert_eq!(r.get::<kilojoule_per_kilogram>(), 2260.0);
//! ```

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P2, Z0},
};

/// Latent heat of a phase change, J/kg in SI.
pub type LatentHeat = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Entropy production rate, W/K in SI.
pub type EntropyRate = Quantity<ISQ<P2, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;
