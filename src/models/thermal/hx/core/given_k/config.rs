use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, ThermalConductance},
    power::kilowatt,
    thermal_conductance::kilowatt_per_kelvin,
};

use crate::models::thermal::hx::core::SolveConfig;

/// Solver configuration for matching a target conductance.
#[derive(Debug, Clone, Copy)]
pub struct GivenKConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the heat duty search variable.
    pub duty_tol: Power,

    /// Absolute tolerance on the conductance residual (achieved - target).
    pub k_tol: ThermalConductance,

    /// Settings for preparing the exchanger state before the search.
    pub solve: SolveConfig,
}

impl Default for GivenKConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            duty_tol: Power::new::<kilowatt>(1e-12),
            k_tol: ThermalConductance::new::<kilowatt_per_kelvin>(1e-12),
            solve: SolveConfig::default(),
        }
    }
}

impl GivenKConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.duty_tol.get::<kilowatt>(),
            x_rel_tol: 0.0,
            residual_tol: self.k_tol.get::<kilowatt_per_kelvin>(),
        }
    }
}
