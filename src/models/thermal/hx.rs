//! Heat exchanger models.
//!
//! [`MixtureHx`] is the [`twine_core::Model`] for a lumped two-stream
//! exchanger whose streams are multi-component mixtures. The computation
//! lives in the internal `core` module; its public types are re-exported
//! here.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_mixture_hx::{
//!     models::thermal::hx::{ExchangerInput, MixtureHx, Schema, Stream},
//!     support::mixture::{Mixture, database},
//! };
//! use uom::si::{power::kilowatt, thermal_conductance::kilowatt_per_kelvin};
//!
//! let water = || -> Mixture {
//!     let entry = database::lookup("water").unwrap();
//!     Mixture::new(vec![entry.component(1.0).unwrap()])
//! };
//!
//! let input = ExchangerInput::new(
//!     Stream::from_working_units(290.0, 300.0, 1.0).unwrap(),
//!     Stream::from_working_units(350.0, 330.0, 1.0).unwrap(),
//!     water(),
//!     water(),
//!     Schema::CounterFlow,
//! );
//!
//! let solution = MixtureHx::default().call(&input).unwrap();
//!
//! // Q = (350 - 330) K * 4.2 kW/K
//! let q = solution.heat_duty.unwrap().get::<kilowatt>();
//! assert!((q - 84.0).abs() < 1e-9);
//! assert_eq!(solution.k_source(), "schema/contact");
//! assert!((solution.conductance.get::<kilowatt_per_kelvin>() - 2.1).abs() < 1e-9);
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    ConductanceSource, ContactType, ExchangerInput, GivenKConfig, GivenKError, GivenKSolution,
    ParseSchemaError, Schema, Solution, SolveConfig, Stream, SweepPoint, given_k, solve,
    solve_with, vary_first_share,
};

/// Lumped mixture heat exchanger as a [`Model`].
///
/// A thin adapter over [`solve_with`]. Evaluation never fails, so the error
/// type is [`Infallible`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MixtureHx {
    /// Constants used by every evaluation.
    pub config: SolveConfig,
}

impl MixtureHx {
    /// Creates a model with a custom configuration.
    #[must_use]
    pub fn new(config: SolveConfig) -> Self {
        Self { config }
    }
}

impl Model for MixtureHx {
    type Input = ExchangerInput;
    type Output = Solution;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(solve_with(input, &self.config))
    }
}
