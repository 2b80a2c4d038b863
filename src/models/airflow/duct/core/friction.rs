use tracing::debug;

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    friction::{self, ColebrookConfig, colebrook_white},
};

use super::{DuctError, FlowRegime, round_to};

/// Friction state of a duct flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionResult {
    /// Reynolds number based on the characteristic diameter.
    pub reynolds_number: f64,

    /// Darcy friction factor.
    ///
    /// Exact `64 / Re` when laminar; rounded to four decimal places when turbulent.
    pub friction_factor: f64,

    /// Regime that selected the friction correlation.
    pub regime: FlowRegime,
}

impl FrictionResult {
    /// Resolves the friction factor for a Reynolds number and relative roughness.
    ///
    /// # Errors
    ///
    /// Returns [`DuctError::InvalidInput`] if the Reynolds number is not
    /// strictly positive or the relative roughness is negative, and
    /// [`DuctError::Computation`] if the turbulent solve fails.
    pub fn resolve(
        reynolds_number: f64,
        relative_roughness: f64,
        config: &ColebrookConfig,
    ) -> Result<Self, DuctError> {
        let reynolds = StrictlyPositive::new(reynolds_number)
            .map_err(|err| DuctError::invalid("Reynolds number", err))?;
        let regime = FlowRegime::classify(reynolds_number);

        debug!(reynolds_number, ?regime, "classified duct flow");

        let friction_factor = match regime {
            FlowRegime::Laminar => friction::laminar(reynolds),
            FlowRegime::Turbulent => {
                let relative_roughness = NonNegative::new(relative_roughness)
                    .map_err(|err| DuctError::invalid("relative roughness", err))?;
                let solution = colebrook_white::solve(reynolds, relative_roughness, config)?;
                round_to(solution.friction_factor, 4)
            }
        };

        Ok(Self {
            reynolds_number,
            friction_factor,
            regime,
        })
    }

    /// Returns `true` if the flow is turbulent.
    #[must_use]
    pub fn is_turbulent(&self) -> bool {
        self.regime == FlowRegime::Turbulent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn laminar_is_exact() {
        let result = FrictionResult::resolve(1000.0, 0.0007, &ColebrookConfig::default()).unwrap();

        assert_eq!(result.regime, FlowRegime::Laminar);
        assert_eq!(result.friction_factor, 0.064);
        assert!(!result.is_turbulent());
    }

    #[test]
    fn turbulent_is_rounded_to_four_places() {
        let result = FrictionResult::resolve(1.0e5, 2.0e-4, &ColebrookConfig::default()).unwrap();

        assert_eq!(result.regime, FlowRegime::Turbulent);
        assert_relative_eq!(result.friction_factor, 0.0190, epsilon = 1e-12);
    }

    #[test]
    fn boundary_uses_colebrook() {
        let result = FrictionResult::resolve(2000.0, 0.0, &ColebrookConfig::default()).unwrap();

        // Laminar would give 0.032; smooth-wall Colebrook gives about 0.0495.
        assert!(result.is_turbulent());
        assert_relative_eq!(result.friction_factor, 0.0495, epsilon = 1e-12);
    }

    #[test]
    fn solver_failure_is_a_computation_error() {
        let err = FrictionResult::resolve(1.0e5, 10.0, &ColebrookConfig::default()).unwrap_err();

        assert!(matches!(err, DuctError::Computation(_)));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn non_positive_reynolds_is_invalid() {
        let err = FrictionResult::resolve(0.0, 0.0, &ColebrookConfig::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
