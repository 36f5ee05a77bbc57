//! Problem formulation for conductance matching.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Power, ThermalConductance},
    power::kilowatt,
    thermal_conductance::kilowatt_per_kelvin,
};

use crate::models::thermal::hx::core::{Schema, state::State};

/// One evaluation of the forward relation, in kW and kW/K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Attempt {
    pub(super) heat_duty: f64,
    pub(super) conductance: f64,
}

/// The topology relation has no value at the requested duty.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{schema} relation is undefined at Q = {heat_duty} kW")]
pub(super) struct RelationUndefined {
    schema: Schema,
    heat_duty: f64,
}

/// Evaluates `K(Q)` for a fixed exchanger state.
pub(super) struct GivenKModel {
    state: State,
    schema: Schema,
}

impl GivenKModel {
    pub(super) fn new(state: State, schema: Schema) -> Self {
        Self { state, schema }
    }
}

impl Model for GivenKModel {
    type Input = Power;
    type Output = Attempt;
    type Error = RelationUndefined;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let heat_duty = input.get::<kilowatt>();
        self.schema
            .conductance(&self.state, heat_duty)
            .map(|conductance| Attempt {
                heat_duty,
                conductance,
            })
            .ok_or(RelationUndefined {
                schema: self.schema,
                heat_duty,
            })
    }
}

/// Residual `achieved_k - target_k`.
pub(super) struct GivenKProblem {
    target: ThermalConductance,
}

impl GivenKProblem {
    pub(super) fn new(target: ThermalConductance) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenKProblem {
    type Input = Power;
    type Output = Attempt;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Power::new::<kilowatt>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.conductance - self.target.get::<kilowatt_per_kelvin>()])
    }
}
