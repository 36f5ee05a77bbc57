use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::ThermalConductance;

/// Errors that can occur while matching a target conductance.
#[derive(Debug, Error)]
pub enum GivenKError {
    /// The bisection solver encountered an error, typically a bracket that
    /// does not enclose the target.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Smallest conductance residual reached.
        residual: ThermalConductance,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
