use uom::si::{
    f64::{Length, MassDensity, Pressure, Velocity},
    length::foot,
    mass_density::pound_per_cubic_foot,
    velocity::foot_per_second,
};

use crate::support::units::inch_of_water_column;

use super::round_to;

/// Gravitational constant, ft/s².
const GRAVITY: f64 = 32.174;

/// Density of water used for the inWC head conversion, lbm/ft³.
const WATER_DENSITY: f64 = 62.4;

/// Reference duct length for reported pressure drops, ft.
const REFERENCE_LENGTH: f64 = 100.0;

/// Frictional pressure loss of a duct run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureDropResult {
    /// Pressure drop per 100 ft of straight duct, rounded to 0.001 inWC.
    pub pressure_drop_per_100ft: Pressure,
}

impl PressureDropResult {
    /// Applies the Darcy-Weisbach equation over 100 ft of duct.
    ///
    /// The friction head of the air column is expressed as inches of water:
    /// `f · (L/D) · ρ·V²/(2g) · 12 / 62.4`.
    #[must_use]
    pub fn darcy_weisbach(
        friction_factor: f64,
        velocity: Velocity,
        diameter: Length,
        density: MassDensity,
    ) -> Self {
        let v = velocity.get::<foot_per_second>();
        let d = diameter.get::<foot>();
        let rho = density.get::<pound_per_cubic_foot>();

        let dp = friction_factor * REFERENCE_LENGTH * rho * v * v * 12.0
            / (d * 2.0 * GRAVITY * WATER_DENSITY);

        Self {
            pressure_drop_per_100ft: Pressure::new::<inch_of_water_column>(round_to(dp, 3)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn drop_at(fps: f64) -> f64 {
        PressureDropResult::darcy_weisbach(
            0.0195,
            Velocity::new::<foot_per_second>(fps),
            Length::new::<foot>(1.0),
            MassDensity::new::<pound_per_cubic_foot>(0.075),
        )
        .pressure_drop_per_100ft
        .get::<inch_of_water_column>()
    }

    #[test]
    fn hand_calculation() {
        // 0.0195 · 100 · 0.075 · 20² · 12 / (1 · 2 · 32.174 · 62.4) = 0.1748...
        assert_relative_eq!(drop_at(20.0), 0.175, epsilon = 1e-9);
    }

    #[test]
    fn increases_with_velocity() {
        let drops: Vec<f64> = [5.0, 10.0, 15.0, 20.0, 30.0, 45.0]
            .into_iter()
            .map(drop_at)
            .collect();

        assert!(drops.windows(2).all(|pair| pair[0] < pair[1]), "{drops:?}");
    }

    #[test]
    fn scales_inversely_with_diameter() {
        let at = |d_ft: f64| {
            PressureDropResult::darcy_weisbach(
                0.02,
                Velocity::new::<foot_per_second>(25.0),
                Length::new::<foot>(d_ft),
                MassDensity::new::<pound_per_cubic_foot>(0.075),
            )
            .pressure_drop_per_100ft
            .get::<inch_of_water_column>()
        };

        assert!(at(0.5) > at(1.0));
        assert!(at(1.0) > at(2.0));
    }
}
