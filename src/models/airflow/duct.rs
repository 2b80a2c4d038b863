//! Straight duct airflow model.
//!
//! Computes flow area, velocity, velocity pressure, Reynolds number, Darcy
//! friction factor, and pressure drop per 100 ft for a round or rectangular
//! duct carrying a known volumetric flow of air.
//!
//! Rectangular ducts are reduced to their equal-friction equivalent diameter
//! and then treated as round. Friction is `64 / Re` below `Re = 2000` and the
//! Colebrook-White solution at and above it.
//!
//! Two entry points share one computation:
//!
//! - [`compute`] for a one-off calculation with the default solver settings.
//! - [`Duct`], a [`twine_core::Model`] holding the air properties and solver
//!   configuration, for use with Twine solvers and observers.

mod core;

pub use self::core::{
    AirProperties, DuctError, DuctGeometry, DuctInput, DuctPerformance, DuctShape, FlowRegime,
    FlowState, FrictionResult, InputError, PressureDropResult, RawDuctInput, ResolvedGeometry,
    TURBULENT_REYNOLDS, reynolds_number,
};

use twine_core::Model;
use uom::si::f64::VolumeRate;

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    friction::ColebrookConfig,
};

/// Computes the airflow performance of a duct with default solver settings.
///
/// # Errors
///
/// Returns [`DuctError::InvalidInput`] or [`DuctError::DivisionByZero`] for
/// degenerate inputs, and [`DuctError::Computation`] if the turbulent
/// friction factor solve fails.
pub fn compute(
    geometry: &DuctGeometry,
    flow_rate: Constrained<VolumeRate, StrictlyPositive>,
    air: &AirProperties,
) -> Result<DuctPerformance, DuctError> {
    self::core::compute(geometry, flow_rate, air, &ColebrookConfig::default())
}

/// A straight duct carrying air.
///
/// Holds the air properties and friction solver settings; each call takes a
/// [`DuctInput`] and is independent of every other call.
///
/// # Example
///
/// ```
/// use ductulator_models::models::airflow::duct::{Duct, DuctGeometry, DuctInput};
/// use twine_core::Model;
/// use uom::si::{f64::{Length, VolumeRate}, length::inch, volume_rate::cubic_foot_per_minute};
///
/// let input = DuctInput::new(
///     DuctGeometry::rectangular(Length::new::<inch>(12.0), Length::new::<inch>(8.0)).unwrap(),
///     VolumeRate::new::<cubic_foot_per_minute>(500.0),
/// )
/// .unwrap();
///
/// let performance = Duct::default().call(&input).unwrap();
/// assert!(performance.geometry.diameter > Length::new::<inch>(8.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Duct {
    air: AirProperties,
    config: ColebrookConfig,
}

impl Duct {
    /// Creates a duct model.
    #[must_use]
    pub fn new(air: AirProperties, config: ColebrookConfig) -> Self {
        Self { air, config }
    }

    /// Returns the air properties.
    #[must_use]
    pub fn air(&self) -> &AirProperties {
        &self.air
    }

    /// Returns the friction solver configuration.
    #[must_use]
    pub fn config(&self) -> &ColebrookConfig {
        &self.config
    }
}

impl Model for Duct {
    type Input = DuctInput;
    type Output = DuctPerformance;
    type Error = DuctError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::compute(&input.geometry, input.flow_rate, &self.air, &self.config)
    }
}
