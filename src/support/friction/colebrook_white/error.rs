use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving the Colebrook-White equation.
#[derive(Debug, Error)]
pub enum ColebrookError {
    /// The bisection solver encountered an error.
    ///
    /// This includes a bracket whose endpoints don't straddle a root.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The solver stopped on a value that doesn't satisfy the equation.
    #[error("non-physical friction factor: f={friction_factor}, residual={residual}")]
    NonPhysical {
        /// Friction factor the solver stopped on.
        friction_factor: f64,

        /// Equation residual at that friction factor.
        residual: f64,
    },
}
