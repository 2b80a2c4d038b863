//! Problem formulation for the Colebrook-White root find.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};

use super::residual;

/// Model evaluating the Colebrook-White residual at a trial friction factor.
pub(super) struct ColebrookModel {
    reynolds: f64,
    relative_roughness: f64,
}

impl ColebrookModel {
    pub(super) fn new(reynolds: f64, relative_roughness: f64) -> Self {
        Self {
            reynolds,
            relative_roughness,
        }
    }
}

/// A trial friction factor and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ColebrookEval {
    pub(super) friction_factor: f64,
    pub(super) residual: f64,
}

/// The residual couldn't be evaluated at a trial friction factor.
#[derive(Debug, Clone, Copy, Error)]
#[error("residual is not finite at f={friction_factor}")]
pub(super) struct NonFiniteResidual {
    friction_factor: f64,
}

impl Model for ColebrookModel {
    type Input = f64;
    type Output = ColebrookEval;
    type Error = NonFiniteResidual;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let friction_factor = *input;
        let residual = residual(friction_factor, self.reynolds, self.relative_roughness);

        if residual.is_finite() {
            Ok(ColebrookEval {
                friction_factor,
                residual,
            })
        } else {
            Err(NonFiniteResidual { friction_factor })
        }
    }
}

/// Equation problem definition for the Colebrook-White root find.
///
/// The search variable is the friction factor itself.
pub(super) struct ColebrookProblem;

impl EquationProblem<1> for ColebrookProblem {
    type Input = f64;
    type Output = ColebrookEval;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
