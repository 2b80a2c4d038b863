use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity},
    length::foot,
    mass_density::pound_per_cubic_foot,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    units::pound_per_foot_hour,
};

/// Air and duct-wall properties used by every duct calculation.
///
/// The [`Default`] values describe standard air (68 °F, sea level) in
/// galvanized sheet-metal duct:
///
/// - density 0.075 lbm/ft³
/// - dynamic viscosity 0.0432 lbm/(ft·h)
/// - absolute roughness 0.0007 ft
///
/// The roughness is a bit above the 0.0005 ft often quoted for sheet metal,
/// which matches the more conservative manufacturer duct sizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    density: MassDensity,
    dynamic_viscosity: DynamicViscosity,
    roughness: Length,
}

impl AirProperties {
    /// Constructs validated air properties.
    ///
    /// # Errors
    ///
    /// Returns an error if density or viscosity is not strictly positive, or
    /// if roughness is negative.
    pub fn new(
        density: MassDensity,
        dynamic_viscosity: DynamicViscosity,
        roughness: Length,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(density)?,
            StrictlyPositive::new(dynamic_viscosity)?,
            NonNegative::new(roughness)?,
        ))
    }

    /// Constructs air properties from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        density: Constrained<MassDensity, StrictlyPositive>,
        dynamic_viscosity: Constrained<DynamicViscosity, StrictlyPositive>,
        roughness: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            density: density.into_inner(),
            dynamic_viscosity: dynamic_viscosity.into_inner(),
            roughness: roughness.into_inner(),
        }
    }

    /// Returns the air density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Returns the air dynamic viscosity.
    #[must_use]
    pub fn dynamic_viscosity(&self) -> DynamicViscosity {
        self.dynamic_viscosity
    }

    /// Returns the absolute roughness of the duct wall.
    #[must_use]
    pub fn roughness(&self) -> Length {
        self.roughness
    }
}

impl Default for AirProperties {
    fn default() -> Self {
        Self {
            density: MassDensity::new::<pound_per_cubic_foot>(0.075),
            dynamic_viscosity: DynamicViscosity::new::<pound_per_foot_hour>(0.0432),
            roughness: Length::new::<foot>(0.0007),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass_density::kilogram_per_cubic_meter;

    #[test]
    fn default_is_standard_air_in_sheet_metal() {
        let air = AirProperties::default();

        assert_relative_eq!(air.density().get::<pound_per_cubic_foot>(), 0.075, epsilon = 1e-12);
        assert_relative_eq!(
            air.dynamic_viscosity().get::<pound_per_foot_hour>(),
            0.0432,
            epsilon = 1e-12
        );
        assert_relative_eq!(air.roughness().get::<foot>(), 0.0007, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_physical_properties() {
        let air = AirProperties::default();

        assert!(
            AirProperties::new(
                MassDensity::new::<kilogram_per_cubic_meter>(0.0),
                air.dynamic_viscosity(),
                air.roughness(),
            )
            .is_err()
        );
        assert!(
            AirProperties::new(
                air.density(),
                DynamicViscosity::new::<pound_per_foot_hour>(-0.01),
                air.roughness(),
            )
            .is_err()
        );
        assert!(
            AirProperties::new(air.density(), air.dynamic_viscosity(), Length::new::<foot>(-1e-4))
                .is_err()
        );

        // A hydraulically smooth wall is allowed.
        assert!(
            AirProperties::new(air.density(), air.dynamic_viscosity(), Length::new::<foot>(0.0))
                .is_ok()
        );
    }
}
