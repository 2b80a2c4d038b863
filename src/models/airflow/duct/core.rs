//! Duct airflow calculation pipeline.
//!
//! Each stage lives in its own module and data flows strictly forward:
//! geometry → flow state → Reynolds number → friction factor → pressure drop.
//! No stage holds state between calls.

mod air;
mod error;
mod flow;
mod friction;
mod geometry;
mod input;
mod pressure_loss;
mod results;
mod reynolds;

pub use air::AirProperties;
pub use error::DuctError;
pub use flow::FlowState;
pub use friction::FrictionResult;
pub use geometry::{DuctGeometry, DuctShape, ResolvedGeometry};
pub use input::{DuctInput, InputError, RawDuctInput};
pub use pressure_loss::PressureDropResult;
pub use results::DuctPerformance;
pub use reynolds::{FlowRegime, TURBULENT_REYNOLDS, reynolds_number};

use uom::si::{f64::VolumeRate, length::foot};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    friction::ColebrookConfig,
};

/// Computes the airflow performance of a duct.
///
/// # Errors
///
/// Returns [`DuctError::InvalidInput`] or [`DuctError::DivisionByZero`] for
/// degenerate inputs, including flow rates large enough to overflow, and
/// [`DuctError::Computation`] if the turbulent friction factor solve fails.
pub(super) fn compute(
    geometry: &DuctGeometry,
    flow_rate: Constrained<VolumeRate, StrictlyPositive>,
    air: &AirProperties,
    config: &ColebrookConfig,
) -> Result<DuctPerformance, DuctError> {
    if !flow_rate.as_ref().is_finite() {
        return Err(DuctError::invalid("flow rate", ConstraintError::NotFinite));
    }

    let geometry = geometry.resolve()?;
    let flow = FlowState::new(flow_rate, geometry.flow_area, air.density())?;
    if !(flow.velocity.is_finite() && flow.velocity_pressure.is_finite()) {
        return Err(overflow());
    }

    let reynolds = reynolds_number(
        air.density(),
        flow.velocity,
        geometry.diameter,
        air.dynamic_viscosity(),
    );
    if !reynolds.is_finite() {
        return Err(overflow());
    }
    let relative_roughness = air.roughness().get::<foot>() / geometry.diameter.get::<foot>();
    let friction = FrictionResult::resolve(reynolds, relative_roughness, config)?;

    let pressure_drop = PressureDropResult::darcy_weisbach(
        friction.friction_factor,
        flow.velocity,
        geometry.diameter,
        air.density(),
    );
    if !pressure_drop.pressure_drop_per_100ft.is_finite() {
        return Err(overflow());
    }

    Ok(DuctPerformance {
        geometry,
        flow,
        friction,
        pressure_drop,
    })
}

/// Error for a finite flow rate whose derived quantities overflow.
fn overflow() -> DuctError {
    DuctError::invalid("flow rate", ConstraintError::NotFinite)
}

/// Rounds to a number of decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}
