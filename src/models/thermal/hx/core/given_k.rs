//! Numeric inversion of the topology relations for a target conductance.
//!
//! Every topology gives `K` in closed form from `Q`. This module finds the
//! `Q` that reaches a target `K` by bisection on that forward relation,
//! holding every temperature and capacitance rate at the values the
//! pipeline derives from the input. It serves as an independent check on
//! the closed-form `Q(K)` relations.

mod config;
mod error;
mod problem;

pub use config::GivenKConfig;
pub use error::GivenKError;

use crate::support::constraint::{Constrained, NonNegative};
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermalConductance},
        power::kilowatt,
        thermal_conductance::kilowatt_per_kelvin,
    },
};

use super::{ExchangerInput, state::State};

use problem::{GivenKModel, GivenKProblem};

/// Heat duty that reaches a target conductance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivenKSolution {
    /// Heat duty found by the search.
    pub heat_duty: Power,

    /// Conductance the topology relation yields at `heat_duty`.
    pub conductance: ThermalConductance,

    /// Bisection iterations performed.
    pub iters: usize,
}

/// Finds the heat duty at which `input.schema` yields `target` conductance.
///
/// The search runs over `bracket`. Duties where the relation is undefined
/// (for example beyond a logarithm's singularity) are treated as lying above
/// the target, so the bracket may extend past them. It must otherwise enclose
/// a single crossing of the target.
///
/// A zero target returns zero duty without searching.
///
/// # Errors
///
/// Returns [`GivenKError`] if the bracket does not enclose the target or the
/// search fails to converge.
pub fn given_k(
    input: &ExchangerInput,
    target: Constrained<ThermalConductance, NonNegative>,
    bracket: [Power; 2],
    config: &GivenKConfig,
) -> Result<GivenKSolution, GivenKError> {
    let target = target.into_inner();

    if target == ThermalConductance::ZERO {
        return Ok(GivenKSolution {
            heat_duty: Power::ZERO,
            conductance: ThermalConductance::ZERO,
            iters: 0,
        });
    }

    let state = State::prepare(input, &config.solve);
    let model = GivenKModel::new(state, input.schema);
    let problem = GivenKProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket.map(|q| q.get::<kilowatt>()),
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // An undefined relation means the duty is past the singularity.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenKError::MaxIters {
            residual: ThermalConductance::new::<kilowatt_per_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    let attempt = solution.snapshot.output;
    Ok(GivenKSolution {
        heat_duty: Power::new::<kilowatt>(attempt.heat_duty),
        conductance: ThermalConductance::new::<kilowatt_per_kelvin>(attempt.conductance),
        iters: solution.iters,
    })
}
