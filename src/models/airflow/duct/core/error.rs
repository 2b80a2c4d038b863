use thiserror::Error;

use crate::support::{constraint::ConstraintError, friction::ColebrookError};

/// Errors that can occur while computing duct performance.
#[derive(Debug, Error)]
pub enum DuctError {
    /// An input quantity violated its constraint.
    ///
    /// Callers typically treat this as "nothing to show yet" rather than a
    /// hard failure.
    #[error("invalid {quantity}")]
    InvalidInput {
        /// Name of the offending quantity.
        quantity: &'static str,

        /// Constraint that was violated.
        #[source]
        source: ConstraintError,
    },

    /// The duct flow area is zero.
    ///
    /// Positive dimensions rule this out except through floating-point
    /// underflow; see [`DuctError::is_invalid_input`].
    #[error("duct flow area is zero")]
    DivisionByZero,

    /// The turbulent friction factor could not be solved.
    ///
    /// This signals a numerical or physical edge case (e.g., extreme
    /// roughness), not a malformed input.
    #[error("friction factor solve failed")]
    Computation(#[from] ColebrookError),
}

impl DuctError {
    /// Creates an invalid input error for a named quantity.
    pub(super) fn invalid(quantity: &'static str, source: ConstraintError) -> Self {
        Self::InvalidInput { quantity, source }
    }

    /// Returns `true` if this error stems from the inputs rather than the solver.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::DivisionByZero)
    }
}
