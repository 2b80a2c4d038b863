//! Darcy friction factor correlations for internal flow.
//!
//! - [`laminar`]: the Hagen-Poiseuille closed form, `f = 64 / Re`.
//! - [`colebrook_white`]: iterative solution of the implicit Colebrook-White
//!   equation for turbulent flow in rough conduits.
//!
//! Both work with the Darcy (not Fanning) friction factor.

pub mod colebrook_white;

pub use colebrook_white::{ColebrookConfig, ColebrookError, ColebrookSolution};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Returns the laminar Darcy friction factor `64 / Re`.
///
/// # Example
///
/// ```
/// use ductulator_models::support::{constraint::StrictlyPositive, friction::laminar};
///
/// let f = laminar(StrictlyPositive::new(1000.0).unwrap());
/// assert_eq!(f, 0.064);
/// ```
#[must_use]
pub fn laminar(reynolds: Constrained<f64, StrictlyPositive>) -> f64 {
    64.0 / reynolds.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn laminar_is_inverse_in_reynolds() {
        let f_500 = laminar(StrictlyPositive::new(500.0).unwrap());
        let f_1000 = laminar(StrictlyPositive::new(1000.0).unwrap());

        assert_relative_eq!(f_500, 0.128);
        assert_relative_eq!(f_500, 2.0 * f_1000);
    }
}
