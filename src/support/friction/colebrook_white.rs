//! Iterative solver for the Colebrook-White equation.
//!
//! The Colebrook-White equation relates the Darcy friction factor `f` to the
//! Reynolds number `Re` and the relative roughness `ε/D` of a conduit:
//!
//! ```text
//! 1/√f + 2·log₁₀( (ε/D)/3.7 + 2.51/(Re·√f) ) = 0
//! ```
//!
//! The left-hand side is strictly decreasing in `f`, so a root within the
//! configured bracket is unique. It's found with bisection, which needs no
//! derivative and fails loudly when the bracket holds no root.

mod config;
mod error;
mod problem;

pub use config::ColebrookConfig;
pub use error::ColebrookError;

use tracing::{debug, warn};
use twine_solvers::equation::bisection;

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use problem::{ColebrookModel, ColebrookProblem};

/// A converged Colebrook-White friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookSolution {
    /// Darcy friction factor, unrounded.
    pub friction_factor: f64,

    /// Equation residual at [`friction_factor`](Self::friction_factor).
    pub residual: f64,

    /// Iteration count performed by the solver.
    pub iters: usize,
}

/// Evaluates the Colebrook-White residual at a trial friction factor.
///
/// Returns `1/√f + 2·log₁₀((ε/D)/3.7 + 2.51/(Re·√f))`, which is zero at the
/// solution. The result is NaN when `f` or the log argument is not positive.
#[must_use]
pub fn residual(friction_factor: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let sqrt_f = friction_factor.sqrt();
    1.0 / sqrt_f + 2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * sqrt_f)).log10()
}

/// Solves the Colebrook-White equation for the Darcy friction factor.
///
/// # Errors
///
/// Returns a [`ColebrookError`] if the bracket holds no root, the solver hits
/// its iteration limit, or the converged value isn't a physical root.
///
/// # Example
///
/// ```
/// use ductulator_models::support::{
///     constraint::{NonNegative, StrictlyPositive},
///     friction::{ColebrookConfig, colebrook_white},
/// };
///
/// let solution = colebrook_white::solve(
///     StrictlyPositive::new(1.0e5).unwrap(),
///     NonNegative::new(0.0).unwrap(),
///     &ColebrookConfig::default(),
/// )
/// .unwrap();
///
/// // Smooth pipe at Re = 1e5 sits near f = 0.018 on the Moody chart.
/// assert!((solution.friction_factor - 0.018).abs() < 5e-4);
/// ```
pub fn solve(
    reynolds: Constrained<f64, StrictlyPositive>,
    relative_roughness: Constrained<f64, NonNegative>,
    config: &ColebrookConfig,
) -> Result<ColebrookSolution, ColebrookError> {
    let reynolds = reynolds.into_inner();
    let relative_roughness = relative_roughness.into_inner();

    let model = ColebrookModel::new(reynolds, relative_roughness);
    let problem = ColebrookProblem;

    let solution = bisection::solve(
        &model,
        &problem,
        config.bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A trial value whose residual can't be evaluated has no root
            // below it, so keep searching toward larger friction factors.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )
    .inspect_err(|err| {
        warn!(reynolds, relative_roughness, %err, "Colebrook-White bisection failed");
    })?;

    if solution.status != bisection::Status::Converged {
        warn!(
            reynolds,
            relative_roughness,
            residual = solution.residual,
            iters = solution.iters,
            "Colebrook-White solver hit iteration limit"
        );
        return Err(ColebrookError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let eval = solution.snapshot.output;
    let friction_factor = eval.friction_factor;

    if !(friction_factor.is_finite() && friction_factor > 0.0)
        || eval.residual.abs() > config.root_tol
    {
        warn!(
            reynolds,
            relative_roughness,
            friction_factor,
            residual = eval.residual,
            "Colebrook-White solver converged to a non-physical value"
        );
        return Err(ColebrookError::NonPhysical {
            friction_factor,
            residual: eval.residual,
        });
    }

    debug!(
        reynolds,
        relative_roughness,
        friction_factor,
        iters = solution.iters,
        "solved Colebrook-White"
    );

    Ok(ColebrookSolution {
        friction_factor,
        residual: eval.residual,
        iters: solution.iters,
    })
}
