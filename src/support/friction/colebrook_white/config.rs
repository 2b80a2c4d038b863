use twine_solvers::equation::bisection;

/// Solver configuration for the Colebrook-White friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Friction factor search bracket, `[lower, upper]`.
    ///
    /// The default `[1e-4, 1.0]` spans every regime on the Moody chart and
    /// contains the customary 0.02 starting estimate.
    pub bracket: [f64; 2],

    /// Absolute tolerance on the friction factor search variable.
    pub friction_tol: f64,

    /// Absolute tolerance on the equation residual.
    pub residual_tol: f64,

    /// Largest residual magnitude accepted as a root once the solver stops.
    pub root_tol: f64,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            bracket: [1e-4, 1.0],
            friction_tol: 1e-12,
            residual_tol: 1e-10,
            root_tol: 1e-6,
        }
    }
}

impl ColebrookConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.friction_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
