//! Heat exchanger building blocks shared by the exchanger models.
//!
//! A stream's capacitance rate `W = m_dot * c` (kW/K in the engine's working
//! units) describes how much its temperature changes per unit of heat
//! exchanged. Every closed-form exchanger relation in this crate is written
//! in terms of the two streams' capacitance rates.
//!
//! [`CapacitanceRate`] only admits strictly positive values. A stream with no
//! flow or no usable specific heat has no capacitance rate at all, which
//! callers express as `Option<CapacitanceRate>`:
//!
//! ```
//! use twine_mixture_hx::support::hx::CapacitanceRate;
//! use uom::si::{
//!     f64::{MassRate, SpecificHeatCapacity},
//!     mass_rate::kilogram_per_second,
//!     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
//!     thermal_conductance::kilowatt_per_kelvin,
//! };
//!
//! let c = SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.2);
//!
//! let flowing = CapacitanceRate::from_mass_rate_and_specific_heat(
//!     MassRate::new::<kilogram_per_second>(2.0),
//!     c,
//! );
//! assert!((flowing.unwrap().get::<kilowatt_per_kelvin>() - 8.4).abs() < 1e-12);
//!
//! let idle = CapacitanceRate::from_mass_rate_and_specific_heat(
//!     MassRate::new::<kilogram_per_second>(0.0),
//!     c,
//! );
//! assert!(idle.is_err());
//! ```

mod capacitance_rate;

pub use capacitance_rate::CapacitanceRate;
