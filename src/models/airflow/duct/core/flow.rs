use uom::si::{
    area::square_foot,
    f64::{Area, MassDensity, Pressure, Velocity, VolumeRate},
    mass_density::pound_per_cubic_foot,
    velocity::foot_per_minute,
    volume_rate::cubic_foot_per_minute,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::inch_of_water_column,
};

use super::DuctError;

/// Velocity at which standard air has a velocity pressure of 1 inWC, ft/min.
const FAN_LAW_VELOCITY: f64 = 4005.0;

/// Reference density of standard air, lbm/ft³.
const STANDARD_AIR_DENSITY: f64 = 0.075;

/// Bulk flow conditions in a duct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    /// Volumetric flow rate.
    pub flow_rate: VolumeRate,

    /// Mean velocity over the flow area.
    pub velocity: Velocity,

    /// Velocity (dynamic) pressure.
    pub velocity_pressure: Pressure,
}

impl FlowState {
    /// Computes velocity and velocity pressure for a flow through an area.
    ///
    /// Velocity pressure uses the fan-engineering form
    /// `(V / 4005)² · (ρ / 0.075)` with `V` in ft/min and `ρ` in lbm/ft³.
    ///
    /// # Errors
    ///
    /// Returns [`DuctError::DivisionByZero`] if the flow area is zero.
    pub fn new(
        flow_rate: Constrained<VolumeRate, StrictlyPositive>,
        flow_area: Area,
        density: MassDensity,
    ) -> Result<Self, DuctError> {
        let flow_rate = flow_rate.into_inner();

        let area_ft2 = flow_area.get::<square_foot>();
        if area_ft2 == 0.0 {
            return Err(DuctError::DivisionByZero);
        }

        let velocity_fpm = flow_rate.get::<cubic_foot_per_minute>() / area_ft2;
        let density_ratio = density.get::<pound_per_cubic_foot>() / STANDARD_AIR_DENSITY;
        let velocity_pressure = (velocity_fpm / FAN_LAW_VELOCITY).powi(2) * density_ratio;

        Ok(Self {
            flow_rate,
            velocity: Velocity::new::<foot_per_minute>(velocity_fpm),
            velocity_pressure: Pressure::new::<inch_of_water_column>(velocity_pressure),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cfm(value: f64) -> Constrained<VolumeRate, StrictlyPositive> {
        StrictlyPositive::new(VolumeRate::new::<cubic_foot_per_minute>(value)).unwrap()
    }

    fn standard_air() -> MassDensity {
        MassDensity::new::<pound_per_cubic_foot>(0.075)
    }

    #[test]
    fn velocity_is_flow_over_area() {
        let flow = FlowState::new(cfm(800.0), Area::new::<square_foot>(0.5), standard_air()).unwrap();

        assert_relative_eq!(flow.velocity.get::<foot_per_minute>(), 1600.0, epsilon = 1e-9);
        assert_relative_eq!(flow.flow_rate.get::<cubic_foot_per_minute>(), 800.0, epsilon = 1e-9);
    }

    #[test]
    fn one_inch_at_4005_fpm() {
        let flow = FlowState::new(cfm(4005.0), Area::new::<square_foot>(1.0), standard_air()).unwrap();
        assert_relative_eq!(
            flow.velocity_pressure.get::<inch_of_water_column>(),
            1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn velocity_pressure_scales_with_density() {
        let area = Area::new::<square_foot>(1.0);
        let light = MassDensity::new::<pound_per_cubic_foot>(0.0375);

        let standard = FlowState::new(cfm(2000.0), area, standard_air()).unwrap();
        let thin = FlowState::new(cfm(2000.0), area, light).unwrap();

        assert_relative_eq!(
            thin.velocity_pressure.get::<inch_of_water_column>(),
            standard.velocity_pressure.get::<inch_of_water_column>() / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_area_is_division_by_zero() {
        let result = FlowState::new(cfm(100.0), Area::new::<square_foot>(0.0), standard_air());
        assert!(matches!(result, Err(DuctError::DivisionByZero)));
    }
}
